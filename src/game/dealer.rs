extern crate alloc;

use alloc::string::String;

use crate::score::PlayerRoundScore;

use super::{Game, Table};

impl Table {
    /// Name of the current dealer. The deal passes one seat to the left each
    /// round, over the seats fixed when the game started.
    pub(super) fn dealer_name(&self) -> Option<&str> {
        let seats = self.current_round()?.scores();
        if seats.is_empty() {
            return None;
        }
        seats
            .get((self.first_dealer + self.cursor) % seats.len())
            .map(PlayerRoundScore::player_name)
    }

    /// The one bid the dealer may not make under the hook rule, once every
    /// other player has bid.
    pub(super) fn forbidden_dealer_bid(&self) -> Option<u32> {
        let round = self.current_round()?;
        let dealer = self.dealer_name()?;

        let mut others: u32 = 0;
        for score in round.scores() {
            if score.player_name() == dealer {
                continue;
            }
            others = others.saturating_add(score.bid()?);
        }

        u32::from(round.cards_dealt()).checked_sub(others)
    }

    /// Whether recording `bid` for the player would leave every seat with a
    /// bid and the total equal to the cards dealt.
    pub(super) fn bid_evens_round(&self, player_name: &str, bid: u32) -> bool {
        let Some(round) = self.current_round() else {
            return false;
        };

        let mut total: u32 = 0;
        for score in round.scores() {
            let entered = if score.player_name() == player_name {
                Some(bid)
            } else {
                score.bid()
            };
            let Some(value) = entered else {
                return false;
            };
            total = total.saturating_add(value);
        }

        total == u32::from(round.cards_dealt())
    }
}

impl Game {
    /// Returns the name of the player dealing the current round.
    ///
    /// The deal rotates over the players seated when the game started, so
    /// roster changes mid-game do not move it. Returns `None` if the round
    /// has no seats or no round is being played.
    pub fn dealer(&self) -> Option<String> {
        self.table.lock().dealer_name().map(String::from)
    }

    /// Returns the seat index of the player who dealt the first round.
    pub fn first_dealer_index(&self) -> usize {
        self.table.lock().first_dealer
    }

    /// Returns the bid that would make total bids equal the cards dealt.
    ///
    /// Only known once every player other than the dealer has bid; under
    /// [`GameOptions::hook`](crate::GameOptions::hook) the dealer may not
    /// bid this value. Returns `None` if the others already bid more than
    /// the cards dealt.
    pub fn forbidden_dealer_bid(&self) -> Option<u32> {
        self.table.lock().forbidden_dealer_bid()
    }
}
