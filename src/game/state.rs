//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Seating players; no game has been started since the last reset.
    NotStarted,
    /// A round is waiting for bids and tricks.
    InProgress,
    /// Every round has been played and the winner is known.
    Finished,
}
