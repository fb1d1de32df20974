//! A single-table blackjack round engine with optional `no_std` support.
//!
//! The crate provides an [`Engine`] that runs one player against the dealer:
//! dealing, hit/stay, automatic dealer play, outcome resolution, and
//! win/loss/draw statistics. A display layer drives it through plain method
//! calls and listens for [`Notification`]s.
//!
//! # Example
//!
//! ```
//! use bjtable::{Engine, RoundState, TableOptions};
//!
//! let engine = Engine::new(TableOptions::default(), 42);
//! engine.start_game();
//! if engine.state() == RoundState::PlayerTurn {
//!     engine.stay();
//! }
//! engine.run_dealer_turn();
//! assert_eq!(engine.state(), RoundState::RoundEnded);
//! assert_eq!(engine.statistics().rounds(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod advice;
pub mod card;
pub mod deck;
pub mod engine;
pub mod error;
pub mod hand;
pub mod notify;
pub mod options;
pub mod outcome;
pub mod stats;
mod sync;

// Re-export main types
pub use advice::{Advice, advise};
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
#[cfg(feature = "std")]
pub use engine::DealerLoop;
pub use engine::{Engine, RoundState, Tick};
pub use error::{CardParseError, DeckError};
pub use hand::{DealerHand, Hand};
pub use notify::{Notification, Notifier};
pub use options::TableOptions;
pub use outcome::{RoundOutcome, RoundResult, resolve};
pub use stats::Statistics;
