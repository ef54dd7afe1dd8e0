//! Board and key card generation.
//!
//! Dealing takes two random steps:
//! 1. Shuffle the 25 words into the 25 grid positions.
//! 2. Pick, without replacement, the positions for the starting team, then
//!    the second team, then neutral cards; the last position left is the
//!    failure card.
//!
//! Both steps draw from the caller's `GameRng`, so a seeded RNG reproduces
//! the same board.

use rustc_hash::FxHashSet;
use tracing::debug;

use super::card::Owner;
use super::grid::Board;
use crate::core::{BoardLayout, GameError, GameRng, Result, TeamColor, Word, BOARD_CARDS};

/// Deals boards for a fixed layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoardGenerator {
    layout: BoardLayout,
}

impl BoardGenerator {
    /// Create a generator, rejecting layouts that cannot fill a board.
    pub fn new(layout: BoardLayout) -> Result<Self> {
        layout.validate()?;
        Ok(Self { layout })
    }

    #[must_use]
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Deal `words` onto a board with `starting_team` holding the larger share.
    pub fn generate(
        &self,
        words: Vec<Word>,
        starting_team: TeamColor,
        rng: &mut GameRng,
    ) -> Result<Board> {
        if words.len() != BOARD_CARDS {
            return Err(GameError::InvalidWordCount {
                expected: BOARD_CARDS,
                actual: words.len(),
            });
        }
        {
            let mut seen = FxHashSet::default();
            if let Some(dup) = words.iter().find(|w| !seen.insert(w.normalized())) {
                return Err(GameError::DuplicateWord {
                    word: dup.display().to_string(),
                });
            }
        }

        let mut words = words;
        rng.shuffle(&mut words);

        let mut positions: Vec<usize> = (0..BOARD_CARDS).collect();
        rng.shuffle(&mut positions);

        let layout = &self.layout;
        let second_team = Owner::Team(starting_team.other());
        let owners = std::iter::repeat(Owner::Team(starting_team))
            .take(layout.starting_team_words)
            .chain(std::iter::repeat(second_team).take(layout.second_team_words))
            .chain(std::iter::repeat(Owner::Neutral).take(layout.neutral_words))
            .chain(std::iter::repeat(Owner::Failure).take(layout.failure_words));

        let mut key = vec![Owner::Neutral; BOARD_CARDS];
        for (&position, owner) in positions.iter().zip(owners) {
            key[position] = owner;
        }

        debug!(%starting_team, "board generated");
        Board::from_key(words, key, starting_team)
    }
}

/// Deal a standard 9/8/7/1 board.
pub fn generate_board(
    words: Vec<Word>,
    starting_team: TeamColor,
    rng: &mut GameRng,
) -> Result<Board> {
    BoardGenerator::default().generate(words, starting_team, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Position;
    use crate::core::Role;

    fn words() -> Vec<Word> {
        (0..25).map(|i| Word::new(format!("word{}", (b'a' + i as u8) as char))).collect()
    }

    #[test]
    fn test_standard_counts() {
        let mut rng = GameRng::new(42);
        let board = generate_board(words(), TeamColor::Blue, &mut rng).unwrap();

        assert_eq!(board.len(), 25);
        assert_eq!(board.count_of(Owner::Team(TeamColor::Blue)), 9);
        assert_eq!(board.count_of(Owner::Team(TeamColor::Red)), 8);
        assert_eq!(board.count_of(Owner::Neutral), 7);
        assert_eq!(board.count_of(Owner::Failure), 1);
        assert_eq!(board.starting_team(), TeamColor::Blue);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate_board(words(), TeamColor::Red, &mut GameRng::new(9)).unwrap();
        let b = generate_board(words(), TeamColor::Red, &mut GameRng::new(9)).unwrap();
        assert_eq!(a, b);

        let c = generate_board(words(), TeamColor::Red, &mut GameRng::new(10)).unwrap();
        assert_ne!(a.key_card(Role::Chief), c.key_card(Role::Chief));
    }

    #[test]
    fn test_words_are_shuffled() {
        let board = generate_board(words(), TeamColor::Red, &mut GameRng::new(1)).unwrap();
        let in_order: Vec<_> = board.cards().map(|c| c.word().clone()).collect();
        assert_ne!(in_order, words());
    }

    #[test]
    fn test_wrong_word_count() {
        let mut w = words();
        w.truncate(20);
        let err = generate_board(w, TeamColor::Red, &mut GameRng::new(1)).unwrap_err();
        assert_eq!(err, GameError::InvalidWordCount { expected: 25, actual: 20 });
    }

    #[test]
    fn test_duplicate_words() {
        let mut w = words();
        w[0] = Word::new("WORDB");
        let err = generate_board(w, TeamColor::Red, &mut GameRng::new(1)).unwrap_err();
        assert_eq!(err, GameError::DuplicateWord { word: "wordb".to_string() });
    }

    #[test]
    fn test_custom_layout() {
        let generator = BoardGenerator::new(BoardLayout::with_team_words(2, 2)).unwrap();
        let board = generator.generate(words(), TeamColor::Red, &mut GameRng::new(5)).unwrap();
        assert_eq!(board.count_of(Owner::Team(TeamColor::Red)), 2);
        assert_eq!(board.count_of(Owner::Team(TeamColor::Blue)), 2);
        assert_eq!(board.count_of(Owner::Neutral), 20);
        assert!(Position::all().all(|p| board.card_at(p).is_some()));
    }

    #[test]
    fn test_invalid_layout_rejected() {
        let layout = BoardLayout {
            neutral_words: 3,
            ..BoardLayout::default()
        };
        assert!(matches!(
            BoardGenerator::new(layout),
            Err(GameError::InvalidLayout { .. })
        ));
    }
}
