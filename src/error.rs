//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while editing the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RosterError {
    /// A player with exactly this name is already seated.
    #[error("a player with this name is already in the roster")]
    DuplicateName,
}

/// Errors that can occur while recording a bid or a trick count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecordError {
    /// There is no round to record into (game not started or finished).
    #[error("no round is currently being played")]
    NoCurrentRound,
    /// The current round has no score record for this player.
    #[error("player not found in the current round")]
    PlayerNotFound,
    /// The value exceeds the cards dealt this round (strict validation only).
    #[error("value {value} exceeds the {cards_dealt} cards dealt this round")]
    OutOfRange {
        /// The rejected value.
        value: u32,
        /// Cards dealt in the current round.
        cards_dealt: u32,
    },
    /// The bid would complete the round with total bids equal to the cards dealt.
    #[error("a bid of {bid} would make total bids equal the cards dealt (hook rule)")]
    HookViolation {
        /// The rejected bid.
        bid: u32,
    },
}

/// Errors that can occur when advancing to the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdvanceError {
    /// There is no round to advance from (game not started or finished).
    #[error("no round is currently being played")]
    NoCurrentRound,
    /// Some players are still missing a bid or a trick count.
    #[error("{missing} player(s) still need a bid and a trick count")]
    Incomplete {
        /// Number of incomplete score records.
        missing: usize,
    },
    /// Tricks won do not add up to the cards dealt (strict validation only).
    #[error("tricks won add up to {actual}, expected {expected}")]
    TrickCountMismatch {
        /// Cards dealt in the current round.
        expected: u32,
        /// Sum of the recorded trick counts.
        actual: u32,
    },
}
