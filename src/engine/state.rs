//! Round state types.

use core::fmt;

/// Round state.
///
/// Exactly one state is current at a time; it decides which transitions do
/// anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundState {
    /// Waiting for the deal.
    #[default]
    Start,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has been resolved; only a reset moves on.
    RoundEnded,
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::PlayerTurn => "player turn",
            Self::DealerTurn => "dealer turn",
            Self::RoundEnded => "round ended",
        })
    }
}

/// What a single [`tick`](super::Engine::tick) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Nothing to do in the current state.
    Idle,
    /// The dealer drew this card and keeps playing.
    DealerDrew(crate::card::Card),
    /// The round was resolved and has ended.
    Resolved(crate::outcome::RoundResult),
}
