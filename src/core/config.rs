//! Match configuration types.
//!
//! Callers configure a match before it starts by providing:
//! - `BoardLayout`: how many cards each owner gets
//! - `MatchRules`: optional rule variations
//! - `ClueLimits`: bounds applied by the clue validator
//! - `MatchConfig`: combines all configuration plus seeding

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use super::team::TeamColor;

/// Rows and columns of the square grid.
pub const GRID_SIZE: usize = 5;

/// Cards on every board.
pub const BOARD_CARDS: usize = GRID_SIZE * GRID_SIZE;

/// Ownership counts for a board.
///
/// The standard layout is 9/8/7/1. Smaller team counts are allowed (the rest
/// become neutral) which keeps test boards short to play out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    /// Cards owned by the team that gives the first clue.
    pub starting_team_words: usize,
    /// Cards owned by the other team.
    pub second_team_words: usize,
    pub neutral_words: usize,
    pub failure_words: usize,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            starting_team_words: 9,
            second_team_words: 8,
            neutral_words: 7,
            failure_words: 1,
        }
    }
}

impl BoardLayout {
    /// Layout with the given team counts; neutral cards fill the rest.
    ///
    /// Call `validate` before use; counts that overflow the board are
    /// rejected there.
    #[must_use]
    pub fn with_team_words(starting_team_words: usize, second_team_words: usize) -> Self {
        let failure_words = 1;
        let neutral_words =
            BOARD_CARDS.saturating_sub(starting_team_words + second_team_words + failure_words);
        Self {
            starting_team_words,
            second_team_words,
            neutral_words,
            failure_words,
        }
    }

    /// Total number of cards described.
    #[must_use]
    pub fn total(&self) -> usize {
        self.starting_team_words + self.second_team_words + self.neutral_words + self.failure_words
    }

    /// Check the layout can be dealt onto a board.
    pub fn validate(&self) -> Result<()> {
        let reason = if self.total() != BOARD_CARDS {
            Some(format!("counts sum to {}, expected {}", self.total(), BOARD_CARDS))
        } else if self.failure_words != 1 {
            Some(format!("expected exactly 1 failure card, got {}", self.failure_words))
        } else if self.starting_team_words == 0 || self.second_team_words == 0 {
            Some("each team needs at least one card".to_string())
        } else {
            None
        };

        match reason {
            Some(reason) => Err(GameError::InvalidLayout { reason }),
            None => Ok(()),
        }
    }
}

/// Rule variations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRules {
    /// Record the opponent as winner when a team reveals the failure card.
    /// Off by default: the revealing team loses and nobody wins.
    pub failure_awards_opponent: bool,
    /// Reject clue numbers above the active team's remaining words.
    pub cap_clue_number: bool,
    /// Let detectives end their turn voluntarily.
    pub allow_pass: bool,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            failure_awards_opponent: false,
            cap_clue_number: true,
            allow_pass: true,
        }
    }
}

/// Bounds on clue words and numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueLimits {
    /// Shortest accepted clue word, in characters.
    pub min_len: usize,
    /// Largest accepted clue number.
    pub max_number: u32,
}

impl Default for ClueLimits {
    fn default() -> Self {
        Self {
            min_len: 2,
            max_number: BOARD_CARDS as u32,
        }
    }
}

/// Complete match configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub layout: BoardLayout,
    pub rules: MatchRules,
    pub limits: ClueLimits,
    /// Fixed seed for reproducible matches. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Fixed starting team. `None` lets the RNG pick.
    pub starting_team: Option<TeamColor>,
}

impl MatchConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_starting_team(mut self, team: TeamColor) -> Self {
        self.starting_team = Some(team);
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: BoardLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_rules(mut self, rules: MatchRules) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn with_limits(mut self, limits: ClueLimits) -> Self {
        self.limits = limits;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = BoardLayout::default();
        assert_eq!(layout.total(), BOARD_CARDS);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_small_layout() {
        let layout = BoardLayout::with_team_words(2, 2);
        assert_eq!(layout.neutral_words, 20);
        assert_eq!(layout.failure_words, 1);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_layout_wrong_total() {
        let layout = BoardLayout {
            starting_team_words: 9,
            second_team_words: 8,
            neutral_words: 8,
            failure_words: 1,
        };
        assert!(matches!(layout.validate(), Err(GameError::InvalidLayout { .. })));
    }

    #[test]
    fn test_layout_needs_one_failure() {
        let layout = BoardLayout {
            starting_team_words: 9,
            second_team_words: 8,
            neutral_words: 8,
            failure_words: 0,
        };
        assert!(matches!(layout.validate(), Err(GameError::InvalidLayout { .. })));
    }

    #[test]
    fn test_layout_team_without_cards() {
        let layout = BoardLayout::with_team_words(0, 8);
        assert!(matches!(layout.validate(), Err(GameError::InvalidLayout { .. })));
    }

    #[test]
    fn test_match_config_builder() {
        let config = MatchConfig::new()
            .with_seed(7)
            .with_starting_team(TeamColor::Blue)
            .with_layout(BoardLayout::with_team_words(3, 2))
            .with_rules(MatchRules {
                allow_pass: false,
                ..MatchRules::default()
            });

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.starting_team, Some(TeamColor::Blue));
        assert_eq!(config.layout.starting_team_words, 3);
        assert!(!config.rules.allow_pass);
        assert_eq!(config.limits, ClueLimits::default());
    }
}
