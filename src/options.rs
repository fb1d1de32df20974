//! Table configuration options.

use core::time::Duration;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use bjtable::TableOptions;
///
/// let options = TableOptions::default()
///     .with_dealer_delay(Duration::from_millis(250))
///     .with_advice(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Dealer total at which the dealer may stop drawing, provided it also
    /// matches or beats the player's total.
    pub dealer_stands_on: u8,
    /// Pause between dealer actions when the dealer loop drives the table.
    pub dealer_delay: Duration,
    /// Whether a two-card 21 on the deal ends the player's turn at once.
    pub natural_ends_player_turn: bool,
    /// Whether an advisory hint is logged after the deal and after each hit.
    pub advice: bool,
    /// Maximum number of undrained notifications kept by the engine.
    pub notification_backlog: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            dealer_stands_on: 17,
            dealer_delay: Duration::from_secs(1),
            natural_ends_player_turn: true,
            advice: true,
            notification_backlog: 256,
        }
    }
}

impl TableOptions {
    /// Sets the dealer stand threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, value: u8) -> Self {
        self.dealer_stands_on = value;
        self
    }

    /// Sets the pause between dealer actions.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_delay(Duration::ZERO);
    /// assert_eq!(options.dealer_delay, Duration::ZERO);
    /// ```
    #[must_use]
    pub const fn with_dealer_delay(mut self, delay: Duration) -> Self {
        self.dealer_delay = delay;
        self
    }

    /// Sets whether a two-card 21 on the deal hands over to the dealer.
    #[must_use]
    pub const fn with_natural_ends_player_turn(mut self, enabled: bool) -> Self {
        self.natural_ends_player_turn = enabled;
        self
    }

    /// Sets whether advisory hints are logged.
    #[must_use]
    pub const fn with_advice(mut self, enabled: bool) -> Self {
        self.advice = enabled;
        self
    }

    /// Sets the notification backlog size.
    ///
    /// A backlog of zero keeps nothing queued; subscribers still receive
    /// every notification.
    #[must_use]
    pub const fn with_notification_backlog(mut self, backlog: usize) -> Self {
        self.notification_backlog = backlog;
        self
    }
}
