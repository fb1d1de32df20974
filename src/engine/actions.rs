use alloc::string::ToString;

use crate::advice;
use crate::card::Card;

use super::{Engine, RoundState};

impl Engine {
    /// Player action: Hit (draw one face-up card).
    ///
    /// Returns the drawn card, or `None` outside the player's turn or when the
    /// deck is exhausted. Busting or reaching 21 is picked up by the next
    /// [`tick`](Self::tick).
    pub fn hit(&self) -> Option<Card> {
        let mut table = self.table.lock();
        if table.state != RoundState::PlayerTurn {
            return None;
        }

        self.notifier.log("Player Hits!");
        let card = Self::draw_for_player(&mut table)?;
        if self.options.advice {
            self.notifier
                .log(advice::advise(&table.player).to_string());
        }
        drop(table);

        self.repaint();
        Some(card)
    }

    /// Player action: Stay (keep the current hand and let the dealer play).
    ///
    /// Returns whether the turn passed to the dealer.
    pub fn stay(&self) -> bool {
        let mut table = self.table.lock();
        if table.state != RoundState::PlayerTurn {
            return false;
        }

        self.notifier.log("Player Stays!");
        self.notifier.log("Dealer's Turn");
        let ended = self.end_player_turn_in(&mut table);
        drop(table);

        self.repaint();
        ended
    }

    /// Resets the game from any state and logs the statistics summary.
    pub fn reset(&self) {
        self.reset_game();
        let summary = self.statistics().to_string();
        self.notifier.log(summary);
    }
}
