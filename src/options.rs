//! Game configuration options.

/// Default highest hand size of a game (the round sequence peaks here).
pub const DEFAULT_MAX_CARDS: u8 = 10;

/// How strictly recorded bids and trick counts are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum BidValidation {
    /// Accept any value as entered.
    #[default]
    Relaxed,
    /// Reject values above the cards dealt, and refuse to close a round
    /// whose trick counts do not add up to the cards dealt.
    Strict,
}

/// Configuration options for an Oh Hell score sheet.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use ohhell::{BidValidation, GameOptions};
///
/// let options = GameOptions::default()
///     .with_max_cards(7)
///     .with_validation(BidValidation::Strict)
///     .with_hook(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Highest hand size; a game deals `1..=max_cards` then back down to 1.
    pub max_cards: u8,
    /// Bid and trick validation mode.
    pub validation: BidValidation,
    /// Whether the bids of a round may not add up to the cards dealt.
    ///
    /// Once every seat has bid, any bid that would make the total equal the
    /// cards dealt is rejected, whoever places it.
    pub hook: bool,
    /// Whether the first dealer is drawn at random (seeded) instead of seat 0.
    /// Off by default.
    pub random_first_dealer: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            max_cards: DEFAULT_MAX_CARDS,
            validation: BidValidation::Relaxed,
            hook: false,
            random_first_dealer: false,
        }
    }
}

impl GameOptions {
    /// Sets the highest hand size.
    ///
    /// # Example
    ///
    /// ```
    /// use ohhell::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_cards(5);
    /// assert_eq!(options.max_cards, 5);
    /// ```
    #[must_use]
    pub const fn with_max_cards(mut self, max_cards: u8) -> Self {
        self.max_cards = max_cards;
        self
    }

    /// Sets the validation mode.
    ///
    /// # Example
    ///
    /// ```
    /// use ohhell::{BidValidation, GameOptions};
    ///
    /// let options = GameOptions::default().with_validation(BidValidation::Strict);
    /// assert_eq!(options.validation, BidValidation::Strict);
    /// ```
    #[must_use]
    pub const fn with_validation(mut self, validation: BidValidation) -> Self {
        self.validation = validation;
        self
    }

    /// Sets whether the hook rule applies to the dealer's bid.
    #[must_use]
    pub const fn with_hook(mut self, hook: bool) -> Self {
        self.hook = hook;
        self
    }

    /// Sets whether the first dealer is drawn at random.
    ///
    /// # Example
    ///
    /// ```
    /// use ohhell::GameOptions;
    ///
    /// let options = GameOptions::default().with_random_first_dealer(true);
    /// assert!(options.random_first_dealer);
    /// ```
    #[must_use]
    pub const fn with_random_first_dealer(mut self, random: bool) -> Self {
        self.random_first_dealer = random;
        self
    }
}
