use crate::outcome::RoundResult;

use super::{Engine, RoundState, Table, Tick};

impl Engine {
    /// Checks if the dealer is done drawing.
    ///
    /// The dealer stops on 21, on a bust, or once their total reaches the
    /// stand threshold and is at least the player's total.
    fn dealer_turn_finished_in(&self, table: &Table) -> bool {
        let dealer_value = table.dealer.value();
        let player_value = table.player.value();

        table.dealer.is_natural_21()
            || table.dealer.is_busted()
            || (dealer_value >= self.options.dealer_stands_on && dealer_value >= player_value)
    }

    /// Returns whether the dealer would stop drawing with the current hands.
    pub fn dealer_turn_finished(&self) -> bool {
        let table = self.table.lock();
        self.dealer_turn_finished_in(&table)
    }

    /// Advances automatic play by one step.
    ///
    /// In the player's turn, a bust or a 21 resolves and ends the round. In
    /// the dealer's turn, the dealer either finishes (resolving the round) or
    /// draws one card, resolving at once if that card makes 21 or busts. In
    /// any other state nothing happens.
    ///
    /// The state is read under the same lock the step mutates under, so a
    /// reset from another thread is never acted on stale.
    pub fn tick(&self) -> Tick {
        let mut table = self.table.lock();
        let tick = match table.state {
            RoundState::PlayerTurn => self.player_turn_step(&mut table),
            RoundState::DealerTurn => self.dealer_turn_step(&mut table),
            RoundState::Start | RoundState::RoundEnded => Tick::Idle,
        };
        drop(table);

        if tick != Tick::Idle {
            self.repaint();
        }
        tick
    }

    /// Ticks until the round leaves the dealer's turn, without pausing.
    ///
    /// Returns the round result, or `None` if nothing was left to resolve.
    pub fn run_dealer_turn(&self) -> Option<RoundResult> {
        loop {
            match self.tick() {
                Tick::DealerDrew(_) => {}
                Tick::Resolved(result) => return Some(result),
                Tick::Idle => return None,
            }
        }
    }

    fn player_turn_step(&self, table: &mut Table) -> Tick {
        let headline = if table.player.is_busted() {
            "Player Busted!"
        } else if table.player.is_natural_21() {
            "Player hits 21!"
        } else {
            return Tick::Idle;
        };

        let result = self.announce(table, headline);
        self.end_round_in(table);
        Tick::Resolved(result)
    }

    fn dealer_turn_step(&self, table: &mut Table) -> Tick {
        if self.dealer_turn_finished_in(table) {
            let headline = if table.dealer.is_natural_21() {
                "Dealer hits 21!"
            } else if table.dealer.is_busted() {
                "Dealer Busted!"
            } else {
                "Dealer Holds."
            };
            return self.finish_dealer_turn(table, headline);
        }

        self.notifier.log("Dealer draws a card.");
        let Some(card) = Self::draw_for_dealer(table, false) else {
            // Nothing left to draw; the dealer holds where they are.
            return self.finish_dealer_turn(table, "Dealer Holds.");
        };

        if table.dealer.is_natural_21() {
            self.finish_dealer_turn(table, "Dealer hits 21!")
        } else if table.dealer.is_busted() {
            self.finish_dealer_turn(table, "Dealer Busted!")
        } else {
            Tick::DealerDrew(card)
        }
    }

    fn finish_dealer_turn(&self, table: &mut Table, headline: &str) -> Tick {
        let result = self.announce(table, headline);
        self.end_round_in(table);
        Tick::Resolved(result)
    }
}
