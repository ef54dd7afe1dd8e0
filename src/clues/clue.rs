//! Clues given by a Chief.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{TeamColor, Word};

/// A one-word hint plus the number of board words it points at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub word: Word,
    pub number: u32,
    pub team: TeamColor,
}

impl Clue {
    #[must_use]
    pub fn new(word: impl Into<Word>, number: u32, team: TeamColor) -> Self {
        Self {
            word: word.into(),
            number,
            team,
        }
    }

    /// Reveals the team may make on this clue: one more than the number.
    #[must_use]
    pub fn guesses_allowed(&self) -> u32 {
        self.number.saturating_add(1)
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guesses_allowed() {
        let clue = Clue::new("Sea", 2, TeamColor::Red);
        assert_eq!(clue.guesses_allowed(), 3);
        assert_eq!(format!("{clue}"), "Sea 2");
    }

    #[test]
    fn test_guesses_allowed_saturates() {
        let clue = Clue::new("Sea", u32::MAX, TeamColor::Blue);
        assert_eq!(clue.guesses_allowed(), u32::MAX);
    }
}
