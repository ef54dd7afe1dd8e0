//! Error types.
//!
//! Every rejected operation returns a `GameError` with a displayable reason.
//! None of them are fatal: the state a rejected call was made against is left
//! untouched, so the caller can re-prompt or abort.
//!
//! Reaching `GameOver` is not an error. Wins and losses are successful
//! transitions and show up as events and in the phase.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::team::{Role, TeamColor};
use crate::board::Position;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GameError>;

/// Why a clue was refused.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClueRejection {
    #[error("clue cannot be empty")]
    Empty,

    #[error("clue '{clue}' must be a single word")]
    MultiWord { clue: String },

    #[error("clue '{clue}' may only contain letters, hyphens or apostrophes")]
    InvalidCharacters { clue: String },

    #[error("clue '{clue}' must be at least {min_len} characters long")]
    TooShort { clue: String, min_len: usize },

    #[error("clue '{clue}' is a word on the board")]
    MatchesBoardWord { clue: String },

    #[error("clue '{clue}' rhymes with board word '{board_word}'")]
    Rhymes { clue: String, board_word: String },

    #[error("clue '{clue}' overlaps board word '{board_word}'")]
    ContainsBoardWord { clue: String, board_word: String },

    #[error("clue number must be at least 1, got {number}")]
    InvalidNumber { number: u32 },

    #[error("clue number {number} exceeds the maximum of {max}")]
    NumberTooHigh { number: u32, max: u32 },
}

/// Engine error.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    // === Setup ===
    #[error("a board needs exactly {expected} words, got {actual}")]
    InvalidWordCount { expected: usize, actual: usize },

    #[error("word '{word}' appears more than once")]
    DuplicateWord { word: String },

    #[error("cannot draw {requested} words from a pool of {available}")]
    InsufficientWords { requested: usize, available: usize },

    #[error("word list has {valid} valid words, at least {required} are needed")]
    InvalidWordList { valid: usize, required: usize },

    #[error("invalid board layout: {reason}")]
    InvalidLayout { reason: String },

    #[error("{team} team has no {missing}")]
    IncompleteTeam { team: TeamColor, missing: Role },

    #[error("{requested} cannot start: the board was dealt for {board} to start")]
    StartingTeamMismatch { requested: TeamColor, board: TeamColor },

    // === Clues ===
    #[error("invalid clue: {0}")]
    InvalidClue(#[from] ClueRejection),

    #[error("it is {expected}'s turn, not {actual}'s")]
    WrongTeamTurn { expected: TeamColor, actual: TeamColor },

    // === Guesses ===
    #[error("position {position} is outside the board")]
    InvalidPosition { position: Position },

    #[error("card at {position} is already revealed")]
    AlreadyRevealed { position: Position },

    #[error("word '{word}' is not on the board")]
    WordNotOnBoard { word: String },

    #[error("cannot {action} during {phase}")]
    WrongPhase { action: &'static str, phase: String },

    // === Persistence ===
    #[error("persistence error: {0}")]
    Persistence(String),
}

/// Where an error came from, for deciding between re-prompt and abort.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Reported before a match starts; the match does not begin.
    Setup,
    /// State unchanged; the active Chief is re-prompted.
    Clue,
    /// State unchanged; the caller is re-prompted.
    Guess,
    /// Encoding or decoding a saved state failed.
    Persistence,
}

/// Flat error kind, stable for display and matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidWordCount,
    DuplicateWord,
    InsufficientWords,
    InvalidWordList,
    InvalidLayout,
    IncompleteTeam,
    StartingTeamMismatch,
    EmptyClue,
    MultiWordClue,
    InvalidClueCharacters,
    ClueTooShort,
    ClueMatchesBoardWord,
    RhymingClue,
    ClueContainsBoardWord,
    InvalidClueNumber,
    WrongTeamTurn,
    InvalidPosition,
    AlreadyRevealed,
    WordNotOnBoard,
    WrongPhase,
    Persistence,
}

impl ClueRejection {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClueRejection::Empty => ErrorKind::EmptyClue,
            ClueRejection::MultiWord { .. } => ErrorKind::MultiWordClue,
            ClueRejection::InvalidCharacters { .. } => ErrorKind::InvalidClueCharacters,
            ClueRejection::TooShort { .. } => ErrorKind::ClueTooShort,
            ClueRejection::MatchesBoardWord { .. } => ErrorKind::ClueMatchesBoardWord,
            ClueRejection::Rhymes { .. } => ErrorKind::RhymingClue,
            ClueRejection::ContainsBoardWord { .. } => ErrorKind::ClueContainsBoardWord,
            ClueRejection::InvalidNumber { .. } | ClueRejection::NumberTooHigh { .. } => {
                ErrorKind::InvalidClueNumber
            }
        }
    }
}

impl GameError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::InvalidWordCount { .. } => ErrorKind::InvalidWordCount,
            GameError::DuplicateWord { .. } => ErrorKind::DuplicateWord,
            GameError::InsufficientWords { .. } => ErrorKind::InsufficientWords,
            GameError::InvalidWordList { .. } => ErrorKind::InvalidWordList,
            GameError::InvalidLayout { .. } => ErrorKind::InvalidLayout,
            GameError::IncompleteTeam { .. } => ErrorKind::IncompleteTeam,
            GameError::StartingTeamMismatch { .. } => ErrorKind::StartingTeamMismatch,
            GameError::InvalidClue(rejection) => rejection.kind(),
            GameError::WrongTeamTurn { .. } => ErrorKind::WrongTeamTurn,
            GameError::InvalidPosition { .. } => ErrorKind::InvalidPosition,
            GameError::AlreadyRevealed { .. } => ErrorKind::AlreadyRevealed,
            GameError::WordNotOnBoard { .. } => ErrorKind::WordNotOnBoard,
            GameError::WrongPhase { .. } => ErrorKind::WrongPhase,
            GameError::Persistence(_) => ErrorKind::Persistence,
        }
    }

    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            GameError::InvalidWordCount { .. }
            | GameError::DuplicateWord { .. }
            | GameError::InsufficientWords { .. }
            | GameError::InvalidWordList { .. }
            | GameError::InvalidLayout { .. }
            | GameError::IncompleteTeam { .. }
            | GameError::StartingTeamMismatch { .. } => ErrorCategory::Setup,
            GameError::InvalidClue(_) | GameError::WrongTeamTurn { .. } => ErrorCategory::Clue,
            GameError::InvalidPosition { .. }
            | GameError::AlreadyRevealed { .. }
            | GameError::WordNotOnBoard { .. }
            | GameError::WrongPhase { .. } => ErrorCategory::Guess,
            GameError::Persistence(_) => ErrorCategory::Persistence,
        }
    }
}

impl From<bincode::Error> for GameError {
    fn from(err: bincode::Error) -> Self {
        GameError::Persistence(err.to_string())
    }
}
