//! Match phases and results.
//!
//! ## Lifecycle
//!
//! ```text
//! Setup -> ClueGiving -> Guessing -> ClueGiving -> ... -> GameOver
//! ```
//!
//! `GameOver` is terminal.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::history::Guesses;
use crate::clues::Clue;
use crate::core::TeamColor;

/// How a match ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    /// A team found all of its words.
    Winner(TeamColor),
    /// `loser` revealed the failure card. `winner` is set only when the
    /// rules award the match to the opponent.
    Loss {
        loser: TeamColor,
        winner: Option<TeamColor>,
    },
    /// Ended early by the caller.
    Aborted { reason: String },
}

impl MatchResult {
    #[must_use]
    pub fn winner(&self) -> Option<TeamColor> {
        match self {
            MatchResult::Winner(team) => Some(*team),
            MatchResult::Loss { winner, .. } => *winner,
            MatchResult::Aborted { .. } => None,
        }
    }

    #[must_use]
    pub fn loser(&self) -> Option<TeamColor> {
        match self {
            MatchResult::Winner(team) => Some(team.other()),
            MatchResult::Loss { loser, .. } => Some(*loser),
            MatchResult::Aborted { .. } => None,
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchResult::Winner(team) => write!(f, "{team} wins"),
            MatchResult::Loss { loser, winner: None } => write!(f, "{loser} loses"),
            MatchResult::Loss {
                loser,
                winner: Some(winner),
            } => write!(f, "{loser} loses, {winner} wins"),
            MatchResult::Aborted { reason } => write!(f, "aborted: {reason}"),
        }
    }
}

/// The turn in progress once a clue has been accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessingTurn {
    pub team: TeamColor,
    pub clue: Clue,
    pub guesses_made: u32,
    /// `clue.number + 1`.
    pub guesses_allowed: u32,
    pub guesses: Guesses,
}

impl GuessingTurn {
    pub(crate) fn new(clue: Clue) -> Self {
        Self {
            team: clue.team,
            guesses_allowed: clue.guesses_allowed(),
            clue,
            guesses_made: 0,
            guesses: Guesses::new(),
        }
    }

    #[must_use]
    pub fn guesses_left(&self) -> u32 {
        self.guesses_allowed.saturating_sub(self.guesses_made)
    }
}

/// Where the match stands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Board dealt, teams not yet checked.
    Setup,
    /// Waiting for `team`'s Chief to give a clue.
    ClueGiving { team: TeamColor },
    /// Waiting for the active team's Detectives.
    Guessing(GuessingTurn),
    GameOver(MatchResult),
}

impl GamePhase {
    /// The team expected to act, if any.
    #[must_use]
    pub fn active_team(&self) -> Option<TeamColor> {
        match self {
            GamePhase::ClueGiving { team } => Some(*team),
            GamePhase::Guessing(turn) => Some(turn.team),
            GamePhase::Setup | GamePhase::GameOver(_) => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self, GamePhase::GameOver(_))
    }

    #[must_use]
    pub fn result(&self) -> Option<&MatchResult> {
        match self {
            GamePhase::GameOver(result) => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            GamePhase::Setup => "setup",
            GamePhase::ClueGiving { .. } => "clue giving",
            GamePhase::Guessing(_) => "guessing",
            GamePhase::GameOver(_) => "game over",
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.active_team() {
            Some(team) => write!(f, "{} ({team})", self.name()),
            None => f.write_str(self.name()),
        }
    }
}
