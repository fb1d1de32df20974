//! The four round transitions.
//!
//! | state        | `start_game`   | `end_player_turn` | `end_round`  | `reset_game` |
//! |--------------|----------------|-------------------|--------------|--------------|
//! | `Start`      | deal → player  | -                 | -            | reset        |
//! | `PlayerTurn` | -              | reveal → dealer   | → ended      | reset        |
//! | `DealerTurn` | -              | -                 | → ended      | reset        |
//! | `RoundEnded` | -              | -                 | -            | reset        |
//!
//! Every reset reshuffles, empties both hands and returns to `Start`. Cells
//! marked `-` leave the table untouched and, outside `Start`, log why.

use alloc::string::ToString;

use crate::advice;
use crate::notify::Notification;

use super::{Engine, RoundState, Table};

impl Engine {
    /// Deals two cards each and starts the player's turn.
    ///
    /// Only acts in [`RoundState::Start`]. If the player is dealt a two-card
    /// 21 and [`natural_ends_player_turn`](crate::TableOptions::natural_ends_player_turn)
    /// is set, the dealer's turn begins straight away.
    ///
    /// Returns whether cards were dealt.
    pub fn start_game(&self) -> bool {
        let mut table = self.table.lock();
        let started = self.start_game_in(&mut table);
        drop(table);
        if started {
            self.repaint();
        }
        started
    }

    /// Reveals the dealer's cards and hands the turn to the dealer.
    ///
    /// Only acts in [`RoundState::PlayerTurn`]. Returns whether it did.
    pub fn end_player_turn(&self) -> bool {
        let mut table = self.table.lock();
        let ended = self.end_player_turn_in(&mut table);
        drop(table);
        if ended {
            self.repaint();
        }
        ended
    }

    /// Ends the round without resolving it.
    ///
    /// Acts in [`RoundState::PlayerTurn`] and [`RoundState::DealerTurn`].
    /// Returns whether it did.
    pub fn end_round(&self) -> bool {
        let mut table = self.table.lock();
        let ended = self.end_round_in(&mut table);
        drop(table);
        if ended {
            self.repaint();
        }
        ended
    }

    /// Reshuffles the deck, clears both hands and returns to
    /// [`RoundState::Start`]. Acts in every state.
    ///
    /// Statistics are kept.
    pub fn reset_game(&self) {
        let mut table = self.table.lock();
        self.reset_game_in(&mut table);
        drop(table);
        self.repaint();
    }

    fn start_game_in(&self, table: &mut Table) -> bool {
        match table.state {
            RoundState::Start => {}
            RoundState::PlayerTurn => {
                self.notifier
                    .log("Cannot start a new game: player turn in progress.");
                return false;
            }
            RoundState::DealerTurn => {
                self.notifier
                    .log("Cannot start game: dealer is currently playing.");
                return false;
            }
            RoundState::RoundEnded => {
                self.notifier
                    .log("Cannot start new game. Press Reset to continue.");
                return false;
            }
        }

        Self::deal(table);
        Self::set_state(table, RoundState::PlayerTurn);

        if self.options.natural_ends_player_turn && table.player.has_blackjack_immediately() {
            self.notifier.log("Player has Blackjack!");
            self.notifier.log("Dealer's Turn");
            self.end_player_turn_in(table);
        } else {
            self.notifier.log("Player's turn!");
            if self.options.advice {
                self.notifier
                    .log(advice::advise(&table.player).to_string());
            }
        }
        true
    }

    pub(super) fn end_player_turn_in(&self, table: &mut Table) -> bool {
        match table.state {
            RoundState::PlayerTurn => {
                self.notifier
                    .log("Player ends turn. Revealing dealer's cards.");
                table.dealer.reveal_all();
                Self::set_state(table, RoundState::DealerTurn);
                true
            }
            RoundState::Start => false,
            RoundState::DealerTurn => {
                self.notifier
                    .log("Player turn already ended. Dealer is acting.");
                false
            }
            RoundState::RoundEnded => {
                self.notifier
                    .log("Player turn already ended. Press Reset to play again.");
                false
            }
        }
    }

    pub(super) fn end_round_in(&self, table: &mut Table) -> bool {
        match table.state {
            RoundState::PlayerTurn => {
                self.notifier.log("Ending round from player turn.");
                Self::set_state(table, RoundState::RoundEnded);
                true
            }
            RoundState::DealerTurn => {
                self.notifier.log("Dealer turn finished. Ending round.");
                Self::set_state(table, RoundState::RoundEnded);
                true
            }
            RoundState::Start => false,
            RoundState::RoundEnded => {
                self.notifier
                    .log("Round already ended. Press Reset to continue.");
                false
            }
        }
    }

    pub(super) fn reset_game_in(&self, table: &mut Table) {
        match table.state {
            RoundState::Start => Self::full_reset(table),
            RoundState::PlayerTurn => {
                self.notifier.log("Game reset during player's turn.");
                Self::full_reset(table);
            }
            RoundState::DealerTurn => {
                self.notifier.log("Game reset during dealer's turn.");
                Self::full_reset(table);
            }
            RoundState::RoundEnded => {
                self.notifier.log("Game reset. New round starting...");
                Self::full_reset(table);
                self.notifier.publish(Notification::ResetLog);
            }
        }
        Self::set_state(table, RoundState::Start);
    }
}
