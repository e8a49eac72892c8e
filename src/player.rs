//! Roster entries.

extern crate alloc;

use alloc::string::String;

/// Fewest players a presentation layer should let a game start with.
///
/// The engine itself does not enforce this bound.
pub const MIN_PLAYERS: usize = 2;

/// Most players a presentation layer should seat.
///
/// The engine itself does not enforce this bound.
pub const MAX_PLAYERS: usize = 8;

/// A seated player and their running score.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    name: String,
    total_score: u32,
}

impl Player {
    /// Creates a player with a total score of zero.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_score: 0,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the sum of the round scores of every finished round.
    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    pub(crate) const fn add_score(&mut self, points: u32) {
        self.total_score = self.total_score.saturating_add(points);
    }

    pub(crate) const fn reset_score(&mut self) {
        self.total_score = 0;
    }
}
