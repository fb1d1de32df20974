//! Round outcome resolution.

use core::fmt;

use crate::hand::Hand;

/// Result of a finished round from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// Player wins (dealer busts or player has the higher total).
    PlayerWins,
    /// Dealer wins (player busts or dealer has the higher total).
    DealerWins,
    /// Equal totals.
    Draw,
}

impl RoundOutcome {
    /// Text shown to the player when the round resolves.
    #[must_use]
    pub const fn announcement(self) -> &'static str {
        match self {
            Self::PlayerWins => "Player wins!\nClick Reset to try again.",
            Self::DealerWins => "Dealer wins!\nClick Reset to try again.",
            Self::Draw => "It's a tie!\nClick Reset to try again.",
        }
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.announcement())
    }
}

/// Final totals of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// Who won.
    pub outcome: RoundOutcome,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
}

/// Decides the round from the two final hands.
///
/// A busted player loses even when the dealer busted too.
#[must_use]
pub fn resolve(player: &Hand, dealer: &Hand) -> RoundResult {
    let player_value = player.value();
    let dealer_value = dealer.value();

    let outcome = match (player.is_busted(), dealer.is_busted()) {
        (true, _) => RoundOutcome::DealerWins,
        (false, true) => RoundOutcome::PlayerWins,
        (false, false) => match player_value.cmp(&dealer_value) {
            core::cmp::Ordering::Greater => RoundOutcome::PlayerWins,
            core::cmp::Ordering::Less => RoundOutcome::DealerWins,
            core::cmp::Ordering::Equal => RoundOutcome::Draw,
        },
    };

    RoundResult {
        outcome,
        player_value,
        dealer_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Suit};

    fn hand(ranks: &[u8]) -> Hand {
        let mut hand = Hand::new();
        for &rank in ranks {
            hand.acquire(Card::new(Suit::Spades, rank));
        }
        hand
    }

    #[test]
    fn higher_total_wins() {
        let result = resolve(&hand(&[10, 10]), &hand(&[10, 9]));
        assert_eq!(result.outcome, RoundOutcome::PlayerWins);
        assert_eq!((result.player_value, result.dealer_value), (20, 19));

        let result = resolve(&hand(&[10, 7]), &hand(&[10, 8]));
        assert_eq!(result.outcome, RoundOutcome::DealerWins);
    }

    #[test]
    fn equal_totals_draw() {
        assert_eq!(
            resolve(&hand(&[10, 8]), &hand(&[9, 9])).outcome,
            RoundOutcome::Draw
        );
    }

    #[test]
    fn busts_decide_before_totals() {
        assert_eq!(
            resolve(&hand(&[10, 10, 5]), &hand(&[10, 7])).outcome,
            RoundOutcome::DealerWins
        );
        assert_eq!(
            resolve(&hand(&[10, 2]), &hand(&[10, 6, 9])).outcome,
            RoundOutcome::PlayerWins
        );
        assert_eq!(
            resolve(&hand(&[10, 10, 5]), &hand(&[10, 6, 9])).outcome,
            RoundOutcome::DealerWins
        );
    }
}
