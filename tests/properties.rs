//! Property tests for round generation and scoring.

use ohhell::{Game, GameOptions, calculate_score, round_sequence};
use proptest::prelude::*;

const NAMES: [&str; 8] = ["A", "B", "C", "D", "E", "F", "G", "H"];

fn seated(players: usize, seed: u64) -> Game {
    let game = Game::new(GameOptions::default(), seed);
    for name in &NAMES[..players] {
        game.add_player(name).unwrap();
    }
    game
}

proptest! {
    /// The schedule climbs to the peak one card at a time, then descends.
    #[test]
    fn prop_sequence_shape(max_cards in 1u8..=60) {
        let seq = round_sequence(max_cards);
        let n = usize::from(max_cards);

        prop_assert_eq!(seq.len(), 2 * n - 1);
        prop_assert!(seq[..n].iter().copied().eq(1..=max_cards));
        prop_assert!(seq[n - 1..].iter().copied().eq((1..=max_cards).rev()));
    }

    /// Only an exact bid scores, and it scores ten plus the tricks.
    #[test]
    fn prop_score_rule(bid in 0u32..=52, tricks in 0u32..=52) {
        let score = calculate_score(Some(bid), Some(tricks));
        if bid == tricks {
            prop_assert_eq!(score, 10 + tricks);
        } else {
            prop_assert_eq!(score, 0);
        }
        prop_assert_eq!(calculate_score(None, Some(tricks)), 0);
        prop_assert_eq!(calculate_score(Some(bid), None), 0);
    }

    /// Every round holds one empty record per seated player.
    #[test]
    fn prop_start_seats_everyone(players in 0usize..=8, max_cards in 1u8..=13, seed in any::<u64>()) {
        let game = seated(players, seed);
        game.start_game_with_max_cards(max_cards);

        let rounds = game.rounds();
        prop_assert_eq!(rounds.len(), 2 * usize::from(max_cards) - 1);
        for round in &rounds {
            prop_assert_eq!(round.scores().len(), players);
            prop_assert!(round.scores().iter().all(|s| !s.is_complete()));
        }
        prop_assert_eq!(game.can_advance_to_next_round(), players == 0);
    }

    /// Closing a round adds exactly each record's score and moves the cursor by one.
    #[test]
    fn prop_advance_adds_round_scores(
        entries in proptest::collection::vec((0u32..=3, 0u32..=3), 2..=8),
        seed in any::<u64>(),
    ) {
        let game = seated(entries.len(), seed);
        game.start_game_with_max_cards(3);

        for (name, &(bid, tricks)) in NAMES.iter().zip(&entries) {
            game.set_bid(name, bid).unwrap();
            game.set_tricks(name, tricks).unwrap();
        }
        prop_assert!(game.can_advance_to_next_round());

        let before = game.current_round_index();
        game.advance_to_next_round().unwrap();
        prop_assert_eq!(game.current_round_index(), before + 1);

        for (player, &(bid, tricks)) in game.players().iter().zip(&entries) {
            prop_assert_eq!(player.total_score(), calculate_score(Some(bid), Some(tricks)));
        }
    }

    /// Totals always equal the sum of the closed rounds' scores, and the
    /// winner appears exactly when the cursor reaches the end.
    #[test]
    fn prop_totals_match_closed_rounds(
        players in 2usize..=5,
        max_cards in 1u8..=4,
        outcomes in proptest::collection::vec(any::<bool>(), 40),
    ) {
        let game = seated(players, 0);
        game.start_game_with_max_cards(max_cards);
        let mut coin = outcomes.iter().cycle();

        while let Some(round) = game.current_round() {
            prop_assert!(game.winner().is_none());
            for score in round.scores() {
                let tricks = u32::from(*coin.next().unwrap());
                let bid = if *coin.next().unwrap() { tricks } else { tricks + 1 };
                game.set_bid(score.player_name(), bid).unwrap();
                game.set_tricks(score.player_name(), tricks).unwrap();
            }
            game.advance_to_next_round().unwrap();

            let rounds = game.rounds();
            let closed = &rounds[..game.current_round_index()];
            for player in game.players() {
                let sum: u32 = closed
                    .iter()
                    .filter_map(|r| r.score_for(player.name()))
                    .map(ohhell::PlayerRoundScore::score)
                    .sum();
                prop_assert_eq!(player.total_score(), sum);
            }
        }

        prop_assert!(game.is_game_finished());
        prop_assert_eq!(game.current_round_index(), game.round_count());
        let best = game.players().iter().map(ohhell::Player::total_score).max();
        prop_assert_eq!(game.winner().map(|w| w.total_score()), best);
    }
}
