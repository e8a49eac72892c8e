//! A score-keeping engine for the Oh Hell trick-taking card game, with
//! optional `no_std` support.
//!
//! The crate provides a [`Game`] type that holds the roster, generates the
//! rising-then-falling sequence of rounds, records each player's bid and
//! tricks won, totals the scores round by round, and names the winner.
//! A made bid scores ten points plus one per trick; a missed bid scores
//! nothing.
//!
//! # Example
//!
//! ```
//! use ohhell::{Game, GameOptions};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.add_player("Ada").unwrap();
//! game.add_player("Bob").unwrap();
//! game.start_game();
//! assert_eq!(game.round_count(), 19);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod error;
pub mod game;
pub mod names;
pub mod options;
pub mod player;
pub mod result;
pub mod round;
pub mod score;
mod sync;

// Re-export main types
pub use error::{AdvanceError, RecordError, RosterError};
pub use game::{Game, GameState};
pub use options::{BidValidation, DEFAULT_MAX_CARDS, GameOptions};
pub use player::{MAX_PLAYERS, MIN_PLAYERS, Player};
pub use result::{PlayerResult, RoundResult};
pub use round::{Round, round_sequence};
pub use score::{MADE_BID_BONUS, PlayerRoundScore, calculate_score};
