//! Card types and card codes.

use core::fmt;
use core::str::FromStr;

use crate::error::CardParseError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in deck order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the single-letter code of the suit.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
            Self::Spades => 'S',
        }
    }

    const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'C' => Some(Self::Clubs),
            'D' => Some(Self::Diamonds),
            'H' => Some(Self::Hearts),
            'S' => Some(Self::Spades),
            _ => None,
        }
    }
}

/// A playing card.
///
/// The suit and rank form the card's identity and never change once the card
/// is created. Only the face-down flag can be flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: u8,
    face_down: bool,
}

impl Card {
    /// Creates a new face-up card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but count as zero when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            face_down: false,
        }
    }

    /// The suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == 1
    }

    /// Returns whether the card is lying face down.
    #[must_use]
    pub const fn is_face_down(&self) -> bool {
        self.face_down
    }

    /// Turns the card face down.
    pub const fn turn_face_down(&mut self) {
        self.face_down = true;
    }

    /// Turns the card face up.
    pub const fn turn_face_up(&mut self) {
        self.face_down = false;
    }

    /// Returns whether two cards share suit and rank, ignoring visibility.
    #[must_use]
    pub const fn same_identity(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit as u8 == other.suit as u8
    }

    /// Returns the rank symbol used in card codes.
    #[must_use]
    pub const fn rank_symbol(&self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_symbol(), self.suit.letter())
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Parses a card code such as `AS`, `10H`, `0H`, `TH` or `kd`.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let code = code.trim();
        let mut chars = code.chars();
        let suit_letter = chars.next_back().ok_or(CardParseError::Empty)?;
        let rank_part = chars.as_str();

        let rank = match rank_part.to_ascii_uppercase().as_str() {
            "A" | "1" => 1,
            "0" | "T" | "10" => 10,
            "J" => 11,
            "Q" => 12,
            "K" => 13,
            digit => match digit.parse::<u8>() {
                Ok(n @ 2..=9) => n,
                _ => return Err(CardParseError::InvalidRank),
            },
        };
        let suit = Suit::from_letter(suit_letter).ok_or(CardParseError::InvalidSuit)?;

        Ok(Self::new(suit, rank))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_in_every_ten_spelling() {
        for code in ["10H", "0H", "TH", "th"] {
            let card: Card = code.parse().unwrap();
            assert_eq!(card, Card::new(Suit::Hearts, 10));
        }
        assert_eq!("AS".parse::<Card>().unwrap(), Card::new(Suit::Spades, 1));
        assert_eq!("kd".parse::<Card>().unwrap(), Card::new(Suit::Diamonds, 13));
    }

    #[test]
    fn rejects_bad_codes() {
        assert_eq!("".parse::<Card>().unwrap_err(), CardParseError::Empty);
        assert_eq!("1X".parse::<Card>().unwrap_err(), CardParseError::InvalidSuit);
        assert_eq!("11H".parse::<Card>().unwrap_err(), CardParseError::InvalidRank);
        assert_eq!("H".parse::<Card>().unwrap_err(), CardParseError::InvalidRank);
    }

    #[test]
    fn visibility_does_not_change_identity() {
        let mut card = Card::new(Suit::Clubs, 12);
        let original = card;
        card.turn_face_down();
        assert!(card.is_face_down());
        assert!(card.same_identity(&original));
        assert_ne!(card, original);
        card.turn_face_up();
        assert_eq!(card, original);
        assert_eq!(alloc::format!("{card}"), "QC");
    }
}
