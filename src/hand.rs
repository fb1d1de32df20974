//! Player and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Deref;

use crate::card::Card;

const fn non_ace_value(rank: u8) -> u8 {
    match rank {
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

/// Evaluates cards into `(value, is_soft)`.
///
/// Non-ace cards are summed first. Each ace then counts 11 if that keeps the
/// running total at 21 or below, otherwise 1.
fn evaluate_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        } else {
            value = value.saturating_add(non_ace_value(card.rank()));
        }
    }

    let mut is_soft = false;
    for _ in 0..aces {
        if value.saturating_add(11) <= 21 {
            value += 11;
            is_soft = true;
        } else {
            value = value.saturating_add(1);
        }
    }

    (value, is_soft)
}

/// An ordered hand of cards held by one participant.
///
/// Values are recomputed from the cards on every query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn acquire(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Discards every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether an ace is currently counted as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand totals exactly 21, whatever the card count.
    ///
    /// A 21 reached by hitting counts here too; see
    /// [`has_blackjack_immediately`](Self::has_blackjack_immediately) for the
    /// two-card natural.
    #[must_use]
    pub fn is_natural_21(&self) -> bool {
        self.value() == 21
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn has_blackjack_immediately(&self) -> bool {
        self.cards.len() == 2 && self.is_natural_21()
    }
}

/// The dealer's hand: a [`Hand`] that can hold face-down cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    hand: Hand,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { hand: Hand::new() }
    }

    /// Adds a card to the hand, face down if `hidden`.
    pub fn acquire(&mut self, mut card: Card, hidden: bool) {
        if hidden {
            card.turn_face_down();
        }
        self.hand.acquire(card);
    }

    /// Turns every card face up.
    pub fn reveal_all(&mut self) {
        for card in &mut self.hand.cards {
            card.turn_face_up();
        }
    }

    /// Turns the first face-down card face up.
    ///
    /// Returns the revealed card, or `None` if nothing was hidden.
    pub fn reveal_one(&mut self) -> Option<Card> {
        let card = self.hand.cards.iter_mut().find(|c| c.is_face_down())?;
        card.turn_face_up();
        Some(*card)
    }

    /// Returns whether at least one card is face down.
    #[must_use]
    pub fn is_hiding_cards(&self) -> bool {
        self.hand.cards.iter().any(Card::is_face_down)
    }

    /// Returns the number of face-down cards.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.hand.cards.iter().filter(|c| c.is_face_down()).count()
    }

    /// Calculates the value of the face-up cards only.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        evaluate_cards(self.hand.cards.iter().filter(|c| !c.is_face_down())).0
    }

    /// Reveals and then discards every card.
    pub fn clear(&mut self) {
        self.reveal_all();
        self.hand.clear();
    }

    /// Returns the underlying hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }
}

impl Deref for DealerHand {
    type Target = Hand;

    fn deref(&self) -> &Hand {
        &self.hand
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn cards(ranks: &[u8]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::new(Suit::Hearts, r)).collect()
    }

    #[test]
    fn aces_are_assigned_after_other_cards() {
        assert_eq!(evaluate_cards(&cards(&[1, 1, 9])), (21, true));
        assert_eq!(evaluate_cards(&cards(&[9, 1, 1])), (21, true));
        assert_eq!(evaluate_cards(&cards(&[1, 1])), (12, true));
        assert_eq!(evaluate_cards(&cards(&[1, 1, 1, 1])), (14, true));
        assert_eq!(evaluate_cards(&cards(&[10, 5, 1])), (16, false));
        assert_eq!(evaluate_cards(&cards(&[13, 12, 1, 1])), (22, false));
    }

    #[test]
    fn face_cards_count_ten() {
        assert_eq!(evaluate_cards(&cards(&[11, 12, 13])), (30, false));
        assert_eq!(evaluate_cards(&cards(&[])), (0, false));
    }
}
