//! Rounds and the hand-size schedule.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::score::PlayerRoundScore;

/// Returns the cards dealt in each round of a game peaking at `max_cards`.
///
/// Hand sizes rise from 1 to `max_cards`, then fall back to 1, for
/// `2 * max_cards - 1` rounds in total. A peak of zero yields no rounds.
///
/// # Example
///
/// ```
/// use ohhell::round_sequence;
///
/// assert_eq!(round_sequence(3), vec![1, 2, 3, 2, 1]);
/// assert!(round_sequence(0).is_empty());
/// ```
#[must_use]
pub fn round_sequence(max_cards: u8) -> Vec<u8> {
    (1..=max_cards).chain((1..max_cards).rev()).collect()
}

/// One deal of the game.
///
/// The set of score records is fixed when the round is created; only the
/// bids and trick counts inside them change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    number: usize,
    cards_dealt: u8,
    /// Score records in roster order.
    scores: Vec<PlayerRoundScore>,
    /// Player name -> index into `scores`.
    index: HashMap<String, usize>,
}

impl Round {
    /// Creates a round with one empty score record per name.
    ///
    /// Repeated names share the first record.
    #[must_use]
    pub fn new<'a>(
        number: usize,
        cards_dealt: u8,
        players: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut scores = Vec::new();
        let mut index = HashMap::new();

        for name in players {
            if index.contains_key(name) {
                continue;
            }
            index.insert(String::from(name), scores.len());
            scores.push(PlayerRoundScore::new(name));
        }

        Self {
            number,
            cards_dealt,
            scores,
            index,
        }
    }

    /// Returns the 1-based round number.
    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    /// Returns how many cards each player is dealt this round.
    #[must_use]
    pub const fn cards_dealt(&self) -> u8 {
        self.cards_dealt
    }

    /// Returns the score records in roster order.
    #[must_use]
    pub fn scores(&self) -> &[PlayerRoundScore] {
        &self.scores
    }

    /// Returns the score record for the named player.
    #[must_use]
    pub fn score_for(&self, player_name: &str) -> Option<&PlayerRoundScore> {
        self.index.get(player_name).and_then(|&i| self.scores.get(i))
    }

    pub(crate) fn score_for_mut(&mut self, player_name: &str) -> Option<&mut PlayerRoundScore> {
        let i = *self.index.get(player_name)?;
        self.scores.get_mut(i)
    }

    /// Returns whether every score record has a bid and a trick count.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.scores.iter().all(PlayerRoundScore::is_complete)
    }

    /// Returns how many score records are still missing a value.
    #[must_use]
    pub fn incomplete_count(&self) -> usize {
        self.scores.iter().filter(|s| !s.is_complete()).count()
    }

    /// Returns the sum of all entered bids.
    #[must_use]
    pub fn total_bids(&self) -> u32 {
        self.scores
            .iter()
            .filter_map(PlayerRoundScore::bid)
            .fold(0, u32::saturating_add)
    }

    /// Returns the sum of all entered trick counts.
    #[must_use]
    pub fn total_tricks(&self) -> u32 {
        self.scores
            .iter()
            .filter_map(PlayerRoundScore::tricks)
            .fold(0, u32::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_rises_then_falls() {
        assert_eq!(round_sequence(1), [1]);
        assert_eq!(round_sequence(4), [1, 2, 3, 4, 3, 2, 1]);
        assert_eq!(round_sequence(10).len(), 19);
    }

    #[test]
    fn new_round_keeps_roster_order_and_skips_repeats() {
        let round = Round::new(1, 3, ["Cleo", "Ana", "Cleo", "Bo"]);
        let names: Vec<&str> = round.scores().iter().map(PlayerRoundScore::player_name).collect();
        assert_eq!(names, ["Cleo", "Ana", "Bo"]);
        assert!(round.score_for("Ana").is_some());
        assert!(round.score_for("ana").is_none());
    }

    #[test]
    fn totals_ignore_missing_values() {
        let mut round = Round::new(2, 2, ["A", "B", "C"]);
        if let Some(score) = round.score_for_mut("A") {
            score.set_bid(2);
        }
        if let Some(score) = round.score_for_mut("C") {
            score.set_bid(1);
        }
        if let Some(score) = round.score_for_mut("B") {
            score.set_tricks(2);
        }

        assert_eq!(round.total_bids(), 3);
        assert_eq!(round.total_tricks(), 2);
        assert_eq!(round.incomplete_count(), 3);
        assert!(!round.is_complete());
    }
}
