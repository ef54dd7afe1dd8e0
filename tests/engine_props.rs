//! Property tests for state machine invariants under random play.
//!
//! Each case deals a seeded match and feeds it a random sequence of legal
//! clues, guesses and passes, checking after every transition that:
//! - revealed cards stay revealed
//! - `words_found` never decreases and never passes the target
//! - `words_found` equals the team's revealed cards
//! - history only grows, and `version` grows by one
//! - no turn reveals more than `number + 1` cards

use proptest::prelude::*;
use word_detective::board::{Owner, Position};
use word_detective::clues::Clue;
use word_detective::core::{Role, TeamColor, TeamConfig};
use word_detective::rules::{GamePhase, GameState, Match, MatchBuilder};
use word_detective::words::WordPool;

#[derive(Clone, Debug)]
enum Move {
    Clue(u32),
    Guess(usize),
    Pass,
}

fn move_strategy() -> impl Strategy<Value = Move> {
    prop_oneof![
        3 => (1u32..5).prop_map(Move::Clue),
        6 => (0usize..25).prop_map(Move::Guess),
        1 => Just(Move::Pass),
    ]
}

fn new_game(seed: u64) -> Match {
    let pool = WordPool::builtin().unwrap();
    MatchBuilder::new()
        .red(TeamConfig::pair("Ana", "Ben"))
        .blue(TeamConfig::pair("Cleo", "Dev"))
        .seed(seed)
        .rhyme(|_: &str, _: &str| false)
        .build(&pool)
        .unwrap()
}

/// First face-down position at or after `start`, wrapping around.
fn face_down_from(state: &GameState, start: usize) -> Position {
    (0..25)
        .map(|offset| Position::from_index((start + offset) % 25))
        .find(|&p| state.board().card_at(p).is_some_and(|c| !c.is_revealed()))
        .unwrap()
}

fn step(game: &mut Match, mv: &Move) {
    let state = game.state().clone();
    match (state.phase(), mv) {
        (GamePhase::ClueGiving { team }, Move::Clue(n)) => {
            let max = state.team(*team).words_remaining().max(1);
            game.submit_clue(Clue::new("qwxz", (*n).min(max), *team)).unwrap();
        }
        (GamePhase::ClueGiving { team }, _) => {
            game.submit_clue(Clue::new("qwxz", 1, *team)).unwrap();
        }
        (GamePhase::Guessing(_), Move::Pass) => {
            game.pass_turn().unwrap();
        }
        (GamePhase::Guessing(_), Move::Guess(i)) => {
            game.submit_guess(face_down_from(&state, *i)).unwrap();
        }
        (GamePhase::Guessing(_), Move::Clue(n)) => {
            game.submit_guess(face_down_from(&state, *n as usize)).unwrap();
        }
        (GamePhase::Setup | GamePhase::GameOver(_), _) => {}
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_random_play_keeps_invariants(
        seed in any::<u64>(),
        moves in prop::collection::vec(move_strategy(), 1..80),
    ) {
        let mut game = new_game(seed);

        for mv in &moves {
            if game.state().is_over() {
                break;
            }
            let before = game.state().clone();
            step(&mut game, mv);
            let after = game.state();

            prop_assert_eq!(after.version(), before.version() + 1);
            prop_assert!(after.history().len() >= before.history().len());
            for (old, new) in before.history().iter().zip(after.history().iter()) {
                prop_assert_eq!(old, new);
            }

            for (old, new) in before.board().cards().zip(after.board().cards()) {
                prop_assert!(!old.is_revealed() || new.is_revealed());
            }

            for color in TeamColor::ALL {
                let (old, new) = (before.team(color), after.team(color));
                prop_assert!(new.words_found >= old.words_found);
                prop_assert!(new.words_found <= new.target_word_count);

                let revealed_own = after
                    .board()
                    .cards()
                    .filter(|c| c.owner_for(Role::Detective) == Some(Owner::Team(color)))
                    .count();
                prop_assert_eq!(new.words_found as usize, revealed_own);
            }

            if let GamePhase::Guessing(turn) = after.phase() {
                prop_assert!(turn.guesses_made < turn.guesses_allowed);
            }
        }

        for record in game.state().history() {
            prop_assert!(record.guesses.len() as u32 <= record.clue.number + 1);
            prop_assert!(record.correct_guesses() as u32 <= record.clue.number + 1);
        }
    }

    #[test]
    fn prop_only_one_winner(
        seed in any::<u64>(),
        moves in prop::collection::vec(move_strategy(), 1..200),
    ) {
        let mut game = new_game(seed);
        for mv in &moves {
            if game.state().is_over() {
                break;
            }
            step(&mut game, mv);
        }

        let won: Vec<TeamColor> = TeamColor::ALL
            .into_iter()
            .filter(|&c| game.state().team(c).has_won())
            .collect();
        prop_assert!(won.len() <= 1);
        if let Some(&team) = won.first() {
            prop_assert_eq!(game.state().result().and_then(|r| r.winner()), Some(team));
        }
    }
}
