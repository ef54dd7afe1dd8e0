//! Turn history.
//!
//! A `TurnRecord` is written once, when its turn concludes, and never touched
//! again. The turn still in progress lives in `GamePhase::Guessing`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::board::{Owner, Position};
use crate::clues::Clue;
use crate::core::{TeamColor, Word};

/// Guesses made during one turn. Most turns hold a handful.
pub type Guesses = SmallVec<[GuessRecord; 4]>;

/// One revealed card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub position: Position,
    pub word: Word,
    pub owner: Owner,
}

/// How a turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Every allowed guess hit the team's own color.
    GuessesExhausted,
    /// A neutral card was revealed.
    HitNeutral,
    /// An opposing card was revealed.
    HitOpponent,
    /// The Detectives stopped guessing.
    Passed,
    /// The guessing team found its last word.
    Won,
    /// The guessing team revealed the opponent's last word.
    OpponentWon,
    /// The failure card was revealed.
    HitFailure,
    /// The match was ended mid-turn.
    Aborted,
}

impl TurnOutcome {
    /// Whether the match is over after this outcome.
    #[must_use]
    pub fn ends_match(self) -> bool {
        matches!(
            self,
            TurnOutcome::Won
                | TurnOutcome::OpponentWon
                | TurnOutcome::HitFailure
                | TurnOutcome::Aborted
        )
    }
}

impl fmt::Display for TurnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TurnOutcome::GuessesExhausted => "guesses exhausted",
            TurnOutcome::HitNeutral => "neutral card",
            TurnOutcome::HitOpponent => "opponent's card",
            TurnOutcome::Passed => "passed",
            TurnOutcome::Won => "won",
            TurnOutcome::OpponentWon => "opponent won",
            TurnOutcome::HitFailure => "failure card",
            TurnOutcome::Aborted => "aborted",
        };
        f.write_str(text)
    }
}

/// A concluded turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based, counting both teams' turns.
    pub number: u32,
    pub team: TeamColor,
    pub clue: Clue,
    pub guesses: Guesses,
    pub outcome: TurnOutcome,
}

impl TurnRecord {
    /// Guesses that hit the team's own color.
    #[must_use]
    pub fn correct_guesses(&self) -> usize {
        self.guesses
            .iter()
            .filter(|g| g.owner == Owner::Team(self.team))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_correct_guesses() {
        let record = TurnRecord {
            number: 1,
            team: TeamColor::Red,
            clue: Clue::new("sea", 2, TeamColor::Red),
            guesses: smallvec![
                GuessRecord {
                    position: Position::new(0, 0),
                    word: Word::new("ocean"),
                    owner: Owner::Team(TeamColor::Red),
                },
                GuessRecord {
                    position: Position::new(0, 1),
                    word: Word::new("sand"),
                    owner: Owner::Neutral,
                },
            ],
            outcome: TurnOutcome::HitNeutral,
        };
        assert_eq!(record.correct_guesses(), 1);
    }

    #[test]
    fn test_ends_match() {
        assert!(TurnOutcome::HitFailure.ends_match());
        assert!(TurnOutcome::OpponentWon.ends_match());
        assert!(!TurnOutcome::Passed.ends_match());
        assert!(!TurnOutcome::HitOpponent.ends_match());
        assert_eq!(TurnOutcome::GuessesExhausted.to_string(), "guesses exhausted");
    }
}
