//! Error types for deck and card operations.
//!
//! Engine operations never return these: an operation that does not fit the
//! current round state is a no-op, and an exhausted deck skips the draw.

use thiserror::Error;

/// Errors that can occur when drawing from or arranging a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Every card has already been drawn.
    #[error("no cards left in the deck")]
    Exhausted,
    /// An arranged deck does not hold exactly 52 cards.
    #[error("a deck must hold exactly 52 cards, got {0}")]
    WrongSize(usize),
    /// An arranged deck holds the same card twice.
    #[error("card appears more than once in the deck")]
    DuplicateCard,
    /// An arranged deck holds a card outside the standard set.
    #[error("card is not part of a standard deck")]
    InvalidCard,
}

/// Errors that can occur when parsing a card code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardParseError {
    /// The code is empty.
    #[error("card code is empty")]
    Empty,
    /// The rank part is not one of A, 2-10, J, Q, K.
    #[error("invalid card rank")]
    InvalidRank,
    /// The suit letter is not one of C, D, H, S.
    #[error("invalid card suit")]
    InvalidSuit,
}
