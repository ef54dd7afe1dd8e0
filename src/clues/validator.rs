//! Clue validation.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. not empty
//! 2. a single token
//! 3. only letters, hyphens or apostrophes
//! 4. at least `min_len` characters
//! 5. not equal to a board word
//! 6. not rhyming with a board word
//! 7. not containing, or contained in, a board word of three or more letters
//! 8. number between 1 and `max_number`
//!
//! Validation is pure. The caller decides which words count as "on the
//! board"; the rules engine passes only face-down words.

use std::fmt;

use super::clue::Clue;
use super::rhyme::{RhymeStrategy, SuffixRhyme};
use crate::core::{ClueLimits, ClueRejection, Word};

/// Outcome of validating a clue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(ClueRejection),
}

impl ValidationResult {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Convert into a `Result` for use with `?`.
    pub fn into_result(self) -> Result<(), ClueRejection> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(rejection) => Err(rejection),
        }
    }
}

/// Validates clues against board words.
pub struct ClueValidator {
    limits: ClueLimits,
    rhyme: Box<dyn RhymeStrategy>,
}

impl Default for ClueValidator {
    fn default() -> Self {
        Self::new(ClueLimits::default())
    }
}

impl fmt::Debug for ClueValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClueValidator")
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}

impl ClueValidator {
    /// Validator using the default `SuffixRhyme` heuristic.
    #[must_use]
    pub fn new(limits: ClueLimits) -> Self {
        Self {
            limits,
            rhyme: Box::new(SuffixRhyme),
        }
    }

    /// Replace the rhyme heuristic.
    #[must_use]
    pub fn with_rhyme(mut self, rhyme: impl RhymeStrategy + 'static) -> Self {
        self.rhyme = Box::new(rhyme);
        self
    }

    pub(crate) fn with_boxed_rhyme(mut self, rhyme: Box<dyn RhymeStrategy>) -> Self {
        self.rhyme = rhyme;
        self
    }

    #[must_use]
    pub fn limits(&self) -> &ClueLimits {
        &self.limits
    }

    /// Validate `clue` against `board_words`.
    #[must_use]
    pub fn validate(&self, clue: &Clue, board_words: &[Word]) -> ValidationResult {
        match self.check(clue, board_words) {
            Ok(()) => ValidationResult::Valid,
            Err(rejection) => ValidationResult::Invalid(rejection),
        }
    }

    fn check(&self, clue: &Clue, board_words: &[Word]) -> Result<(), ClueRejection> {
        self.check_word(&clue.word, board_words)?;

        if clue.number < 1 {
            return Err(ClueRejection::InvalidNumber {
                number: clue.number,
            });
        }
        if clue.number > self.limits.max_number {
            return Err(ClueRejection::NumberTooHigh {
                number: clue.number,
                max: self.limits.max_number,
            });
        }
        Ok(())
    }

    /// Run only the word checks (1 to 7).
    pub fn check_word(&self, word: &Word, board_words: &[Word]) -> Result<(), ClueRejection> {
        let clue = word.normalized();
        let display = || word.display().to_string();

        if word.is_empty() {
            return Err(ClueRejection::Empty);
        }
        if word.is_multi_token() {
            return Err(ClueRejection::MultiWord { clue: display() });
        }
        if !word.has_word_characters() {
            return Err(ClueRejection::InvalidCharacters { clue: display() });
        }
        if word.len() < self.limits.min_len {
            return Err(ClueRejection::TooShort {
                clue: display(),
                min_len: self.limits.min_len,
            });
        }

        if board_words.iter().any(|b| b == word) {
            return Err(ClueRejection::MatchesBoardWord { clue: display() });
        }

        if let Some(board_word) = board_words
            .iter()
            .find(|b| self.rhyme.rhymes(clue, b.normalized()))
        {
            return Err(ClueRejection::Rhymes {
                clue: display(),
                board_word: board_word.display().to_string(),
            });
        }

        if let Some(board_word) = board_words.iter().find(|b| {
            let b = b.normalized();
            b.chars().count() >= 3 && (clue.contains(b) || b.contains(clue))
        }) {
            return Err(ClueRejection::ContainsBoardWord {
                clue: display(),
                board_word: board_word.display().to_string(),
            });
        }

        Ok(())
    }
}
