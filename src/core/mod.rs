//! Core engine types: words, teams, RNG, configuration, errors.
//!
//! Everything here is independent of board layout and turn flow; the other
//! modules build on these.

pub mod config;
pub mod error;
pub mod rng;
pub mod team;
pub mod word;

pub use config::{BoardLayout, ClueLimits, MatchConfig, MatchRules, BOARD_CARDS, GRID_SIZE};
pub use error::{ClueRejection, ErrorCategory, ErrorKind, GameError, Result};
pub use rng::GameRng;
pub use team::{Player, Role, Team, TeamColor, TeamConfig, TeamMap};
pub use word::{normalize, Word};
