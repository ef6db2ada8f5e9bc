//! Round rule options.

use crate::hand::BLACKJACK;

/// Rules for dealer play and payouts.
///
/// Returns are total credits per unit staked, so a return of 2 gives the stake
/// back plus an equal win.
///
/// ```
/// use starjack::RoundOptions;
///
/// let options = RoundOptions::default()
///     .with_blackjack_return(3)
///     .with_stand_on_soft_17(false)
///     .with_double_down(false);
/// assert_eq!(options.blackjack_return, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOptions {
    /// Credit per unit staked for a natural blackjack.
    pub blackjack_return: u64,
    /// Credit per unit staked for an ordinary win.
    pub win_return: u64,
    /// Credit per unit staked for a push.
    pub push_return: u64,
    /// Total at which the dealer stops drawing. Values above 21 act as 21.
    pub dealer_stands_on: u8,
    /// Whether the dealer stands on a soft total equal to `dealer_stands_on`.
    pub stand_on_soft_17: bool,
    /// Whether doubling down is offered.
    pub double_down: bool,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            blackjack_return: 3,
            win_return: 2,
            push_return: 1,
            dealer_stands_on: 17,
            stand_on_soft_17: true,
            double_down: true,
        }
    }
}

impl RoundOptions {
    /// Sets the credit multiplier for a natural blackjack.
    ///
    /// # Example
    ///
    /// ```
    /// use starjack::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_blackjack_return(5);
    /// assert_eq!(options.blackjack_return, 5);
    /// ```
    #[must_use]
    pub const fn with_blackjack_return(mut self, multiplier: u64) -> Self {
        self.blackjack_return = multiplier;
        self
    }

    /// Sets the credit multiplier for an ordinary win.
    #[must_use]
    pub const fn with_win_return(mut self, multiplier: u64) -> Self {
        self.win_return = multiplier;
        self
    }

    /// Sets the credit multiplier for a push.
    #[must_use]
    pub const fn with_push_return(mut self, multiplier: u64) -> Self {
        self.push_return = multiplier;
        self
    }

    /// Sets the total at which the dealer stands.
    ///
    /// Values above 21 are clamped to 21.
    ///
    /// # Example
    ///
    /// ```
    /// use starjack::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_dealer_stands_on(30);
    /// assert_eq!(options.dealer_stands_on, 21);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = if total > BLACKJACK { BLACKJACK } else { total };
        self
    }

    /// Sets whether the dealer stands on a soft total equal to
    /// `dealer_stands_on` (soft 17 under the default threshold).
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets whether doubling down is offered.
    #[must_use]
    pub const fn with_double_down(mut self, allowed: bool) -> Self {
        self.double_down = allowed;
        self
    }

    /// Returns whether the dealer must draw on `value`.
    ///
    /// The threshold is capped at 21 so the dealer always stops.
    ///
    /// ```
    /// use starjack::RoundOptions;
    ///
    /// let options = RoundOptions {
    ///     dealer_stands_on: 255,
    ///     ..RoundOptions::default()
    /// };
    /// assert!(options.dealer_draws(20, false));
    /// assert!(!options.dealer_draws(21, false));
    /// ```
    #[must_use]
    pub const fn dealer_draws(&self, value: u8, is_soft: bool) -> bool {
        let threshold = if self.dealer_stands_on > BLACKJACK {
            BLACKJACK
        } else {
            self.dealer_stands_on
        };
        if value < threshold {
            return true;
        }
        value == threshold && is_soft && !self.stand_on_soft_17
    }
}
