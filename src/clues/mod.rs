//! Clues and clue validation.
//!
//! - `Clue`: word, number and issuing team
//! - `ClueValidator`: ordered, pure checks against board words
//! - `RhymeStrategy`: pluggable rhyme heuristic used by the validator

pub mod clue;
pub mod rhyme;
pub mod validator;

pub use clue::Clue;
pub use rhyme::{RhymeStrategy, SuffixRhyme};
pub use validator::{ClueValidator, ValidationResult};
