//! Role-gated read-only views of a match.
//!
//! A Chief's view carries the full key card. A Detective's view is built from
//! `DetectiveCard`, which has no owner field for face-down cards, so hidden
//! ownership cannot leak through it.

use serde::{Deserialize, Serialize};

use super::engine::GameState;
use super::history::TurnRecord;
use super::phase::GamePhase;
use crate::board::{KeyCard, Owner, Position};
use crate::clues::Clue;
use crate::core::{Role, Team, TeamMap, Word};

/// A card as a Detective sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetectiveCard {
    Hidden {
        position: Position,
        word: Word,
    },
    Revealed {
        position: Position,
        word: Word,
        owner: Owner,
    },
}

impl DetectiveCard {
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            DetectiveCard::Hidden { position, .. } | DetectiveCard::Revealed { position, .. } => {
                *position
            }
        }
    }

    #[must_use]
    pub fn word(&self) -> &Word {
        match self {
            DetectiveCard::Hidden { word, .. } | DetectiveCard::Revealed { word, .. } => word,
        }
    }

    /// The owner, once the card is face up.
    #[must_use]
    pub fn owner(&self) -> Option<Owner> {
        match self {
            DetectiveCard::Hidden { .. } => None,
            DetectiveCard::Revealed { owner, .. } => Some(*owner),
        }
    }
}

/// Everything a Chief may see.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChiefView {
    pub key: KeyCard,
    pub phase: GamePhase,
    pub teams: TeamMap<Team>,
    pub clues: Vec<Clue>,
    pub history: Vec<TurnRecord>,
    pub version: u64,
}

/// Everything a Detective may see.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectiveView {
    /// Row-major.
    pub cards: Vec<DetectiveCard>,
    pub phase: GamePhase,
    pub teams: TeamMap<Team>,
    pub clues: Vec<Clue>,
    pub history: Vec<TurnRecord>,
    pub version: u64,
}

/// A snapshot for one role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStateView {
    Chief(ChiefView),
    Detective(DetectiveView),
}

impl GameStateView {
    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            GameStateView::Chief(_) => Role::Chief,
            GameStateView::Detective(_) => Role::Detective,
        }
    }

    #[must_use]
    pub fn phase(&self) -> &GamePhase {
        match self {
            GameStateView::Chief(view) => &view.phase,
            GameStateView::Detective(view) => &view.phase,
        }
    }

    #[must_use]
    pub fn clues(&self) -> &[Clue] {
        match self {
            GameStateView::Chief(view) => &view.clues,
            GameStateView::Detective(view) => &view.clues,
        }
    }

    #[must_use]
    pub fn version(&self) -> u64 {
        match self {
            GameStateView::Chief(view) => view.version,
            GameStateView::Detective(view) => view.version,
        }
    }
}

impl GameState {
    /// Project the state for `role`.
    ///
    /// Taking a snapshot never changes the state, so repeated calls without a
    /// transition in between return equal views.
    #[must_use]
    pub fn snapshot(&self, role: Role) -> GameStateView {
        let phase = self.phase().clone();
        let teams = self.teams().clone();
        let clues = self.clue_history();
        let history: Vec<TurnRecord> = self.history().iter().cloned().collect();
        let version = self.version();

        match self.board().key_card(role) {
            Some(key) => GameStateView::Chief(ChiefView {
                key,
                phase,
                teams,
                clues,
                history,
                version,
            }),
            None => GameStateView::Detective(DetectiveView {
                cards: self
                    .board()
                    .cards()
                    .map(|card| match card.owner_for(Role::Detective) {
                        Some(owner) => DetectiveCard::Revealed {
                            position: card.position(),
                            word: card.word().clone(),
                            owner,
                        },
                        None => DetectiveCard::Hidden {
                            position: card.position(),
                            word: card.word().clone(),
                        },
                    })
                    .collect(),
                phase,
                teams,
                clues,
                history,
                version,
            }),
        }
    }
}
