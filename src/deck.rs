//! A single 52-card deck with a draw cursor.

extern crate alloc;

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DeckError;

/// One standard deck of 52 distinct cards.
///
/// Cards are drawn in order from a cursor; the cards themselves stay in the
/// deck so that shuffling always permutes the full set again.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a freshly shuffled deck.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self {
            cards: Self::standard_cards(),
            cursor: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.shuffle();
        deck
    }

    /// Creates a deck that deals the given order before its first shuffle.
    ///
    /// The seed drives every later shuffle.
    ///
    /// # Errors
    ///
    /// Returns an error unless `order` holds each of the 52 standard cards
    /// exactly once.
    pub fn from_order(order: Vec<Card>, seed: u64) -> Result<Self, DeckError> {
        if order.len() != DECK_SIZE {
            return Err(DeckError::WrongSize(order.len()));
        }

        let mut seen = [false; DECK_SIZE];
        for card in &order {
            if !(1..=13).contains(&card.rank()) {
                return Err(DeckError::InvalidCard);
            }
            let slot = Self::slot(card);
            if seen[slot] {
                return Err(DeckError::DuplicateCard);
            }
            seen[slot] = true;
        }

        let cards = order
            .into_iter()
            .map(|card| Card::new(card.suit(), card.rank()))
            .collect();

        Ok(Self {
            cards,
            cursor: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    fn standard_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }
        cards
    }

    fn slot(card: &Card) -> usize {
        let suit = Suit::ALL
            .iter()
            .position(|&s| s == card.suit())
            .unwrap_or_default();
        suit * 13 + usize::from(card.rank() - 1)
    }

    /// Randomly permutes all 52 cards and resets the draw cursor.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        self.cursor = 0;
    }

    /// Returns whether at least one card is left to draw.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.cursor < DECK_SIZE
    }

    /// Draws the card at the cursor, face up.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] once all 52 cards have been drawn.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        let card = *self.cards.get(self.cursor).ok_or(DeckError::Exhausted)?;
        self.cursor += 1;
        log::trace!("drew {card}, {} left", self.remaining());
        Ok(card)
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        DECK_SIZE - self.cursor
    }

    /// Returns the full deck order, drawn cards included.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_order_rejects_malformed_decks() {
        let short = Deck::standard_cards()[..51].to_vec();
        assert_eq!(
            Deck::from_order(short, 1).unwrap_err(),
            DeckError::WrongSize(51)
        );

        let mut duplicate = Deck::standard_cards();
        duplicate[51] = duplicate[0];
        assert_eq!(
            Deck::from_order(duplicate, 1).unwrap_err(),
            DeckError::DuplicateCard
        );

        let mut invalid = Deck::standard_cards();
        invalid[7] = Card::new(Suit::Clubs, 14);
        assert_eq!(
            Deck::from_order(invalid, 1).unwrap_err(),
            DeckError::InvalidCard
        );
    }

    #[test]
    fn from_order_deals_face_up_in_order() {
        let mut order = Deck::standard_cards();
        order.reverse();
        order[0].turn_face_down();
        let mut deck = Deck::from_order(order, 3).unwrap();

        let first = deck.draw().unwrap();
        assert_eq!(first, Card::new(Suit::Spades, 13));
        assert!(!first.is_face_down());
    }
}
