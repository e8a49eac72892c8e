//! Round result types returned when a round is closed.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// Result for a single player in a closed round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player's name.
    pub name: String,
    /// The bid the player made.
    pub bid: u32,
    /// The tricks the player won.
    pub tricks: u32,
    /// Points earned this round.
    pub score: u32,
    /// Running total after this round.
    ///
    /// `None` if the player left the roster after the game started; their
    /// points are not credited to anyone.
    pub total: Option<u32>,
}

impl PlayerResult {
    /// Returns whether the player made their bid.
    #[must_use]
    pub const fn made_bid(&self) -> bool {
        self.bid == self.tricks
    }
}

/// Result of a closed round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The 1-based number of the round that was closed.
    pub round_number: usize,
    /// Cards dealt in that round.
    pub cards_dealt: u8,
    /// One result per score record, in roster order.
    pub players: Vec<PlayerResult>,
    /// Whether this was the last round of the game.
    pub game_finished: bool,
}
