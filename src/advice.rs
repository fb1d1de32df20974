//! Advisory hints for the player.

use core::fmt;

use crate::hand::Hand;

/// A suggestion for the player's next move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Advice {
    /// The hand is 11 or lower and cannot bust.
    Hit,
    /// The hand is 17 or higher.
    Stay,
    /// Anything in between.
    UseJudgment,
}

/// Suggests a move based only on the hand's value.
#[must_use]
pub fn advise(hand: &Hand) -> Advice {
    match hand.value() {
        0..=11 => Advice::Hit,
        17.. => Advice::Stay,
        _ => Advice::UseJudgment,
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hit => "Recommendation: Hit.",
            Self::Stay => "Recommendation: Stay.",
            Self::UseJudgment => "Use your judgment!",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Suit};

    fn hand(ranks: &[u8]) -> Hand {
        let mut hand = Hand::new();
        for &rank in ranks {
            hand.acquire(Card::new(Suit::Diamonds, rank));
        }
        hand
    }

    #[test]
    fn thresholds() {
        assert_eq!(advise(&hand(&[5, 6])), Advice::Hit);
        assert_eq!(advise(&hand(&[10, 2])), Advice::UseJudgment);
        assert_eq!(advise(&hand(&[10, 6])), Advice::UseJudgment);
        assert_eq!(advise(&hand(&[10, 7])), Advice::Stay);
        assert_eq!(advise(&hand(&[1, 6])), Advice::Stay);
        assert_eq!(advise(&hand(&[10, 10, 5])), Advice::Stay);
    }
}
