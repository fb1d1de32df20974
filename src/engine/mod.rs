//! Round engine and state management.

use alloc::format;
use alloc::vec::Vec;

use crate::sync::Mutex;

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::{DealerHand, Hand};
use crate::notify::{Notification, Notifier};
use crate::options::TableOptions;
use crate::outcome::{self, RoundResult};
use crate::stats::Statistics;

mod actions;
mod dealer;
#[cfg(feature = "std")]
mod driver;
pub mod state;
mod transitions;

#[cfg(feature = "std")]
pub use driver::DealerLoop;
pub use state::{RoundState, Tick};

/// Everything a round mutates, kept under one lock.
#[derive(Debug)]
struct Table {
    deck: Deck,
    player: Hand,
    dealer: DealerHand,
    state: RoundState,
    last_result: Option<RoundResult>,
}

/// A single-player blackjack table.
///
/// The engine owns the deck, both hands, the statistics, and the current
/// [`RoundState`]. Every method takes `&self`, so the engine can be shared
/// between a UI thread and a [`DealerLoop`] behind an `Arc`.
#[derive(Debug)]
pub struct Engine {
    /// Table options.
    options: TableOptions,
    /// Deck, hands and round state.
    table: Mutex<Table>,
    /// Win/loss/draw counters; survive resets.
    stats: Mutex<Statistics>,
    /// Outgoing notifications.
    notifier: Notifier,
}

impl Engine {
    /// Creates a new engine with a deck shuffled from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Engine, RoundState, TableOptions};
    ///
    /// let engine = Engine::new(TableOptions::default(), 42);
    /// assert_eq!(engine.state(), RoundState::Start);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self::with_deck(options, Deck::new(seed))
    }

    /// Creates a new engine that deals from `deck` as it stands.
    #[must_use]
    pub const fn with_deck(options: TableOptions, deck: Deck) -> Self {
        let backlog = options.notification_backlog;
        Self {
            options,
            table: Mutex::new(Table {
                deck,
                player: Hand::new(),
                dealer: DealerHand::new(),
                state: RoundState::Start,
                last_result: None,
            }),
            stats: Mutex::new(Statistics::new()),
            notifier: Notifier::new(backlog),
        }
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the current round state.
    pub fn state(&self) -> RoundState {
        self.table.lock().state
    }

    /// Returns a copy of the player's hand.
    pub fn player_hand(&self) -> Hand {
        self.table.lock().player.clone()
    }

    /// Returns a copy of the dealer's hand.
    pub fn dealer_hand(&self) -> DealerHand {
        self.table.lock().dealer.clone()
    }

    /// Returns the number of cards left in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.table.lock().deck.remaining()
    }

    /// Returns the result of the last resolved round, until the next reset.
    pub fn last_result(&self) -> Option<RoundResult> {
        self.table.lock().last_result
    }

    /// Returns the current statistics.
    pub fn statistics(&self) -> Statistics {
        *self.stats.lock()
    }

    /// Zeroes the statistics. Game resets never do this.
    pub fn reset_statistics(&self) {
        self.stats.lock().reset();
    }

    /// Takes every queued notification, oldest first.
    pub fn drain_notifications(&self) -> Vec<Notification> {
        self.notifier.drain()
    }

    /// Opens a channel that receives every notification published from now on.
    #[cfg(feature = "std")]
    pub fn subscribe(&self) -> std::sync::mpsc::Receiver<Notification> {
        self.notifier.subscribe()
    }

    fn set_state(table: &mut Table, next: RoundState) {
        log::debug!("round state {} -> {}", table.state, next);
        table.state = next;
    }

    fn repaint(&self) {
        self.notifier.publish(Notification::Repaint);
    }

    /// Draws a face-up card for the player. An exhausted deck skips the draw.
    fn draw_for_player(table: &mut Table) -> Option<Card> {
        match table.deck.draw() {
            Ok(card) => {
                table.player.acquire(card);
                Some(card)
            }
            Err(err) => {
                log::warn!("player draw skipped: {err}");
                None
            }
        }
    }

    /// Draws a card for the dealer. An exhausted deck skips the draw.
    fn draw_for_dealer(table: &mut Table, hidden: bool) -> Option<Card> {
        match table.deck.draw() {
            Ok(card) => {
                table.dealer.acquire(card, hidden);
                Some(card)
            }
            Err(err) => {
                log::warn!("dealer draw skipped: {err}");
                None
            }
        }
    }

    /// Two cards each, alternating player then dealer; the dealer's first
    /// card is dealt face down.
    fn deal(table: &mut Table) {
        for i in 0..2 {
            Self::draw_for_player(table);
            Self::draw_for_dealer(table, i == 0);
        }
    }

    /// Reshuffles the deck and empties both hands.
    fn full_reset(table: &mut Table) {
        table.deck.shuffle();
        table.player.clear();
        table.dealer.clear();
        table.last_result = None;
    }

    /// Resolves the round, records it, and logs `headline` with the result.
    fn announce(&self, table: &mut Table, headline: &str) -> RoundResult {
        let result = outcome::resolve(&table.player, &table.dealer);
        self.stats.lock().record(result.outcome);
        table.last_result = Some(result);

        log::info!(
            "round resolved: {:?} (player {}, dealer {})",
            result.outcome,
            result.player_value,
            result.dealer_value
        );
        self.notifier
            .log(format!("{headline}\n{}", result.outcome.announcement()));
        result
    }
}
