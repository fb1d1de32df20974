//! Win/loss/draw counters kept across rounds.

use core::fmt;

use crate::outcome::RoundOutcome;

/// Counts of resolved rounds from the player's point of view.
///
/// Counters live as long as the engine. A game reset leaves them alone; only
/// [`Statistics::reset`] clears them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Statistics {
    /// Rounds the player won.
    pub wins: u32,
    /// Rounds the dealer won.
    pub losses: u32,
    /// Rounds that ended level.
    pub draws: u32,
}

impl Statistics {
    /// Creates zeroed counters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            wins: 0,
            losses: 0,
            draws: 0,
        }
    }

    /// Increments the counter matching `outcome`.
    pub const fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::PlayerWins => self.wins += 1,
            RoundOutcome::DealerWins => self.losses += 1,
            RoundOutcome::Draw => self.draws += 1,
        }
    }

    /// Zeroes every counter.
    pub const fn reset(&mut self) {
        *self = Self::new();
    }

    /// Total number of resolved rounds.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wins: {}, Losses: {}, Draws: {}",
            self.wins, self.losses, self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_resets() {
        let mut stats = Statistics::new();
        stats.record(RoundOutcome::PlayerWins);
        stats.record(RoundOutcome::PlayerWins);
        stats.record(RoundOutcome::DealerWins);
        stats.record(RoundOutcome::Draw);
        assert_eq!(alloc::format!("{stats}"), "Wins: 2, Losses: 1, Draws: 1");
        assert_eq!(stats.rounds(), 4);

        stats.reset();
        assert_eq!(stats, Statistics::default());
    }
}
