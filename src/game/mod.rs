//! Game engine and state management.

use alloc::vec::Vec;
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::error::RosterError;
use crate::options::GameOptions;
use crate::player::Player;
use crate::round::Round;

mod dealer;
mod recording;
mod scoring;
pub mod state;

pub use state::GameState;

/// Everything that changes while a game is played, kept under one lock so
/// each operation sees and leaves a consistent table.
#[derive(Debug, Default)]
struct Table {
    /// Roster in seating order.
    players: Vec<Player>,
    /// Every round of the game, generated at start.
    rounds: Vec<Round>,
    /// Index of the round being played; `rounds.len()` once finished.
    cursor: usize,
    /// Seat index, within each round's score records, of the first dealer.
    first_dealer: usize,
    /// Whether `start_game` has run since construction or the last reset.
    started: bool,
}

impl Table {
    fn current_round(&self) -> Option<&Round> {
        self.rounds.get(self.cursor)
    }

    fn current_round_mut(&mut self) -> Option<&mut Round> {
        self.rounds.get_mut(self.cursor)
    }

    fn is_finished(&self) -> bool {
        self.cursor >= self.rounds.len()
    }
}

/// An Oh Hell score-keeping engine.
///
/// The game owns the roster, the generated rounds, and the cursor marking
/// the round being played. Construct one per application and hand it by
/// reference to whatever needs it; every method takes `&self`.
///
/// # Example
///
/// ```
/// use ohhell::{Game, GameOptions};
///
/// let game = Game::new(GameOptions::default().with_max_cards(1), 7);
/// game.add_player("Ada").unwrap();
/// game.add_player("Bob").unwrap();
/// game.start_game();
///
/// game.set_bid("Ada", 1).unwrap();
/// game.set_tricks("Ada", 1).unwrap();
/// game.set_bid("Bob", 1).unwrap();
/// game.set_tricks("Bob", 0).unwrap();
/// game.advance_to_next_round().unwrap();
///
/// assert!(game.is_game_finished());
/// assert_eq!(game.winner().unwrap().name(), "Ada");
/// ```
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    table: Mutex<Table>,
    /// Draws the first dealer of each game.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates an empty game with the given seed.
    ///
    /// The seed only affects which player deals first.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            table: Mutex::new(Table::default()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Seats a new player with a total score of zero.
    ///
    /// Names are compared exactly, so `"ana"` and `"Ana"` are different
    /// players. Rounds that already exist are not changed; the new player
    /// takes part from the next [`start_game`](Self::start_game).
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::DuplicateName`] if the name is already seated.
    pub fn add_player(&self, name: &str) -> Result<(), RosterError> {
        self.table.with(|table| {
            if table.players.iter().any(|p| p.name() == name) {
                debug!("rejected duplicate player name {name:?}");
                return Err(RosterError::DuplicateName);
            }

            table.players.push(Player::new(name));
            info!("player {name:?} joined ({} seated)", table.players.len());
            Ok(())
        })
    }

    /// Removes every player with exactly this name.
    ///
    /// Rounds that already exist keep their score records for the player;
    /// those records are skipped when totals are updated.
    pub fn remove_player(&self, name: &str) {
        self.table.with(|table| {
            let before = table.players.len();
            table.players.retain(|p| p.name() != name);
            if table.players.len() == before {
                debug!("no player named {name:?} to remove");
            } else {
                info!("player {name:?} left ({} seated)", table.players.len());
            }
        });
    }

    /// Clears the roster and every round, returning to the initial state.
    pub fn reset(&self) {
        *self.table.lock() = Table::default();
        info!("game reset");
    }

    /// Returns a snapshot of the roster in seating order.
    pub fn players(&self) -> Vec<Player> {
        self.table.lock().players.clone()
    }

    /// Returns the seated player with exactly this name.
    pub fn player(&self, name: &str) -> Option<Player> {
        self.table
            .lock()
            .players
            .iter()
            .find(|p| p.name() == name)
            .cloned()
    }

    /// Returns the number of seated players.
    pub fn player_count(&self) -> usize {
        self.table.lock().players.len()
    }

    /// Returns a snapshot of every round of the game.
    pub fn rounds(&self) -> Vec<Round> {
        self.table.lock().rounds.clone()
    }

    /// Returns the number of rounds in the game.
    pub fn round_count(&self) -> usize {
        self.table.lock().rounds.len()
    }

    /// Returns the 0-based index of the round being played.
    ///
    /// Equals [`round_count`](Self::round_count) once the game is finished.
    pub fn current_round_index(&self) -> usize {
        self.table.lock().cursor
    }

    /// Returns a snapshot of the round being played.
    ///
    /// Returns `None` once every round has been played, or before a game
    /// has been started.
    pub fn current_round(&self) -> Option<Round> {
        self.table.lock().current_round().cloned()
    }

    /// Returns whether every round has been played.
    ///
    /// A game with no rounds (including one never started) counts as
    /// finished.
    pub fn is_game_finished(&self) -> bool {
        self.table.lock().is_finished()
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        let table = self.table.lock();
        if !table.started {
            GameState::NotStarted
        } else if table.is_finished() {
            GameState::Finished
        } else {
            GameState::InProgress
        }
    }
}
