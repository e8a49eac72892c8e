use log::{debug, info};
use rand::Rng;

use crate::error::RecordError;
use crate::options::BidValidation;
use crate::player::Player;
use crate::round::{Round, round_sequence};

use super::{Game, Table};

impl Game {
    /// Starts a game for the current roster using
    /// [`GameOptions::max_cards`](crate::GameOptions::max_cards).
    pub fn start_game(&self) {
        self.start_game_with_max_cards(self.options.max_cards);
    }

    /// Starts a game whose hand size peaks at `max_cards`.
    ///
    /// Any previous rounds are discarded, every total score is reset to
    /// zero, and `2 * max_cards - 1` rounds are generated, each with one
    /// empty score record per seated player. Any roster size is accepted,
    /// including an empty one.
    pub fn start_game_with_max_cards(&self, max_cards: u8) {
        let mut table = self.table.lock();
        let Table {
            players,
            rounds,
            cursor,
            first_dealer,
            started,
        } = &mut *table;

        players.iter_mut().for_each(Player::reset_score);
        *cursor = 0;
        *started = true;
        *rounds = round_sequence(max_cards)
            .into_iter()
            .enumerate()
            .map(|(i, cards)| Round::new(i + 1, cards, players.iter().map(Player::name)))
            .collect();

        *first_dealer = if self.options.random_first_dealer && !players.is_empty() {
            self.rng.lock().random_range(0..players.len())
        } else {
            0
        };

        info!(
            "game started: {} players, {} rounds, peak {max_cards} cards",
            players.len(),
            rounds.len()
        );
    }

    /// Records a player's bid for the current round.
    ///
    /// A later call replaces the earlier bid.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no current round, the player has no
    /// score record in it, the bid exceeds the cards dealt under
    /// [`BidValidation::Strict`], or, under the hook rule, the bid would
    /// complete the round's bids with a total equal to the cards dealt.
    pub fn set_bid(&self, player_name: &str, bid: u32) -> Result<(), RecordError> {
        let mut table = self.table.lock();
        let cards_dealt = self.check_record(&table, player_name, bid)?;

        if self.options.hook && table.bid_evens_round(player_name, bid) {
            debug!("hook rule rejected bid {bid} from {player_name:?}");
            return Err(RecordError::HookViolation { bid });
        }

        table
            .current_round_mut()
            .and_then(|round| round.score_for_mut(player_name))
            .ok_or(RecordError::PlayerNotFound)?
            .set_bid(bid);
        debug!("{player_name:?} bid {bid} of {cards_dealt}");
        Ok(())
    }

    /// Records how many tricks a player won in the current round.
    ///
    /// A later call replaces the earlier count.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no current round, the player has no
    /// score record in it, or the count exceeds the cards dealt under
    /// [`BidValidation::Strict`].
    pub fn set_tricks(&self, player_name: &str, tricks: u32) -> Result<(), RecordError> {
        let mut table = self.table.lock();
        let cards_dealt = self.check_record(&table, player_name, tricks)?;

        table
            .current_round_mut()
            .and_then(|round| round.score_for_mut(player_name))
            .ok_or(RecordError::PlayerNotFound)?
            .set_tricks(tricks);
        debug!("{player_name:?} took {tricks} of {cards_dealt}");
        Ok(())
    }

    /// Returns the sum of the bids entered so far in the current round.
    ///
    /// Missing bids count as zero; with no current round the sum is zero.
    pub fn total_bids(&self) -> u32 {
        self.table
            .lock()
            .current_round()
            .map_or(0, Round::total_bids)
    }

    /// Checks that `value` can be recorded for the player and returns the
    /// cards dealt in the current round.
    fn check_record(
        &self,
        table: &Table,
        player_name: &str,
        value: u32,
    ) -> Result<u32, RecordError> {
        let Some(round) = table.current_round() else {
            debug!("no current round to record {player_name:?} into");
            return Err(RecordError::NoCurrentRound);
        };

        if round.score_for(player_name).is_none() {
            debug!("{player_name:?} has no score record in round {}", round.number());
            return Err(RecordError::PlayerNotFound);
        }

        let cards_dealt = u32::from(round.cards_dealt());
        if self.options.validation == BidValidation::Strict && value > cards_dealt {
            return Err(RecordError::OutOfRange { value, cards_dealt });
        }

        Ok(cards_dealt)
    }
}
