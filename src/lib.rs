//! # word-detective
//!
//! Rules engine for a two-team word-guessing board game. Each team has a
//! Chief, who sees the key card and gives one-word clues, and Detectives, who
//! reveal cards on a 5x5 board trying to find their team's words.
//!
//! ## Design Principles
//!
//! 1. **States Are Values**: Every transition takes a `GameState` by
//!    reference and returns a new one. Rejected calls leave the old state
//!    untouched.
//!
//! 2. **Deterministic Setup**: Word draws and boards come from a seeded
//!    `GameRng`, so a seed reproduces a match.
//!
//! 3. **Views By Role**: Snapshots are built for a role. A Detective's view
//!    has no place to put the owner of a face-down card.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Board and history use `im::Vector`, so
//!   keeping old states around is cheap.
//!
//! - **Pluggable Rhymes**: Clue validation takes any `RhymeStrategy`.
//!
//! ## Modules
//!
//! - `core`: Words, teams, RNG, configuration, errors
//! - `words`: Word pool loading and drawing
//! - `board`: Cards, positions, key card, board generation
//! - `clues`: Clues, validation, rhyme heuristics
//! - `rules`: Phases, state machine, win/loss evaluation, views, match handle
//! - `logging`: Subscriber setup for binaries and tests

pub mod board;
pub mod clues;
pub mod core;
pub mod logging;
pub mod rules;
pub mod words;

// Re-export commonly used types
pub use crate::core::{
    BoardLayout, ClueLimits, ClueRejection, ErrorCategory, ErrorKind, GameError, GameRng,
    MatchConfig, MatchRules, Player, Result, Role, Team, TeamColor, TeamConfig, TeamMap, Word,
};

pub use crate::words::{LoadReport, WordPool};

pub use crate::board::{generate_board, Board, BoardGenerator, Card, KeyCard, Owner, Position};

pub use crate::clues::{Clue, ClueValidator, RhymeStrategy, SuffixRhyme, ValidationResult};

pub use crate::rules::{
    new_match, GameEvent, GamePhase, GameState, GameStateView, Match, MatchBuilder, MatchResult,
    Transition, TurnOutcome, TurnRecord,
};
