//! Per-player, per-round score records.

extern crate alloc;

use alloc::string::String;

/// Points awarded for making a bid, on top of one point per trick.
pub const MADE_BID_BONUS: u32 = 10;

/// Scores a bid against the tricks actually won.
///
/// A made bid is worth [`MADE_BID_BONUS`] plus the tricks won. A missed bid
/// scores nothing, however close it was, and so does a record that is still
/// missing either value.
///
/// # Example
///
/// ```
/// use ohhell::calculate_score;
///
/// assert_eq!(calculate_score(Some(3), Some(3)), 13);
/// assert_eq!(calculate_score(Some(2), Some(5)), 0);
/// assert_eq!(calculate_score(None, Some(1)), 0);
/// ```
#[must_use]
pub const fn calculate_score(bid: Option<u32>, tricks: Option<u32>) -> u32 {
    match (bid, tricks) {
        (Some(bid), Some(tricks)) if bid == tricks => MADE_BID_BONUS.saturating_add(tricks),
        _ => 0,
    }
}

/// One player's bid and trick count for one round.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerRoundScore {
    player_name: String,
    bid: Option<u32>,
    tricks: Option<u32>,
}

impl PlayerRoundScore {
    /// Creates an empty record for the named player.
    #[must_use]
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            bid: None,
            tricks: None,
        }
    }

    /// Returns the name of the player this record belongs to.
    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Returns the bid, if entered.
    #[must_use]
    pub const fn bid(&self) -> Option<u32> {
        self.bid
    }

    /// Returns the tricks won, if entered.
    #[must_use]
    pub const fn tricks(&self) -> Option<u32> {
        self.tricks
    }

    /// Sets the bid, replacing any previous one.
    pub const fn set_bid(&mut self, bid: u32) {
        self.bid = Some(bid);
    }

    /// Sets the tricks won, replacing any previous count.
    pub const fn set_tricks(&mut self, tricks: u32) {
        self.tricks = Some(tricks);
    }

    /// Returns whether both the bid and the tricks won are entered.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.bid.is_some() && self.tricks.is_some()
    }

    /// Returns whether the bid was made exactly.
    #[must_use]
    pub fn made_bid(&self) -> bool {
        self.is_complete() && self.bid == self.tricks
    }

    /// Returns the score this record is worth, see [`calculate_score`].
    #[must_use]
    pub const fn score(&self) -> u32 {
        calculate_score(self.bid, self.tricks)
    }
}
