use alloc::string::String;
use alloc::vec::Vec;
use log::{debug, info};

use crate::error::AdvanceError;
use crate::options::BidValidation;
use crate::player::Player;
use crate::result::{PlayerResult, RoundResult};

use super::{Game, Table};

impl Game {
    fn check_advance(&self, table: &Table) -> Result<(), AdvanceError> {
        let round = table.current_round().ok_or(AdvanceError::NoCurrentRound)?;

        let missing = round.incomplete_count();
        if missing > 0 {
            return Err(AdvanceError::Incomplete { missing });
        }

        if self.options.validation == BidValidation::Strict {
            let expected = u32::from(round.cards_dealt());
            let actual = round.total_tricks();
            if actual != expected {
                return Err(AdvanceError::TrickCountMismatch { expected, actual });
            }
        }

        Ok(())
    }

    /// Returns whether the current round can be closed.
    ///
    /// True when a round is being played and every player in it has both a
    /// bid and a trick count. Under [`BidValidation::Strict`] the trick
    /// counts must also add up to the cards dealt.
    pub fn can_advance_to_next_round(&self) -> bool {
        self.check_advance(&self.table.lock()).is_ok()
    }

    /// Closes the current round and moves on to the next one.
    ///
    /// Each seated player's round score is added to their total; score
    /// records of players who have since left are skipped. On error nothing
    /// changes.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is being played, some player is missing
    /// a bid or a trick count, or (strict validation) the trick counts do
    /// not add up to the cards dealt.
    pub fn advance_to_next_round(&self) -> Result<RoundResult, AdvanceError> {
        let mut table = self.table.lock();
        if let Err(err) = self.check_advance(&table) {
            debug!("cannot advance round: {err}");
            return Err(err);
        }

        let Table {
            players,
            rounds,
            cursor,
            ..
        } = &mut *table;
        let round = rounds.get(*cursor).ok_or(AdvanceError::NoCurrentRound)?;

        let results: Vec<PlayerResult> = round
            .scores()
            .iter()
            .map(|record| {
                let score = record.score();
                let total = players
                    .iter_mut()
                    .find(|p| p.name() == record.player_name())
                    .map(|player| {
                        player.add_score(score);
                        player.total_score()
                    });
                PlayerResult {
                    name: String::from(record.player_name()),
                    bid: record.bid().unwrap_or_default(),
                    tricks: record.tricks().unwrap_or_default(),
                    score,
                    total,
                }
            })
            .collect();

        let round_number = round.number();
        let cards_dealt = round.cards_dealt();
        *cursor += 1;
        let game_finished = *cursor >= rounds.len();

        info!("round {round_number} ({cards_dealt} cards) closed");
        if game_finished {
            info!("game finished after {round_number} rounds");
        }

        Ok(RoundResult {
            round_number,
            cards_dealt,
            players: results,
            game_finished,
        })
    }

    /// Returns the player with the highest total once the game is finished.
    ///
    /// Ties go to the tied player seated earliest. Returns `None` before
    /// the game is finished or when the roster is empty.
    pub fn winner(&self) -> Option<Player> {
        let table = self.table.lock();
        if !table.is_finished() {
            return None;
        }

        table
            .players
            .iter()
            .fold(None, |best: Option<&Player>, player| match best {
                Some(leader) if leader.total_score() >= player.total_score() => Some(leader),
                _ => Some(player),
            })
            .cloned()
    }

    /// Returns the roster ordered by total score, highest first.
    ///
    /// Tied players keep their seating order.
    pub fn standings(&self) -> Vec<Player> {
        let mut players = self.players();
        players.sort_by(|a, b| b.total_score().cmp(&a.total_score()));
        players
    }
}
