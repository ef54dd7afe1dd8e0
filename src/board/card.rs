//! Cards and grid positions.
//!
//! A card's owner is private. Code outside the crate reads it through
//! `Card::owner_for`, which takes the viewer's role: Chiefs see every owner,
//! Detectives only see owners of revealed cards.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Role, TeamColor, Word, GRID_SIZE};

/// Who a card belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    Team(TeamColor),
    Neutral,
    /// Revealing it loses the match for the guessing team.
    Failure,
}

impl Owner {
    /// The team owning the card, if any.
    #[must_use]
    pub fn team(self) -> Option<TeamColor> {
        match self {
            Owner::Team(color) => Some(color),
            Owner::Neutral | Owner::Failure => None,
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Owner::Team(color) => write!(f, "{color}"),
            Owner::Neutral => f.write_str("Neutral"),
            Owner::Failure => f.write_str("Failure"),
        }
    }
}

/// Zero-based (row, column) on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position of the `index`-th card in row-major order.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self {
            row: index / GRID_SIZE,
            col: index % GRID_SIZE,
        }
    }

    /// Row-major index, or `None` when off the grid.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        self.is_on_board().then_some(self.row * GRID_SIZE + self.col)
    }

    #[must_use]
    pub fn is_on_board(self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// Every position on the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..GRID_SIZE * GRID_SIZE).map(Position::from_index)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A word card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    word: Word,
    owner: Owner,
    revealed: bool,
    position: Position,
}

impl Card {
    pub(crate) fn new(word: Word, owner: Owner, position: Position) -> Self {
        Self {
            word,
            owner,
            revealed: false,
            position,
        }
    }

    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// The owner as visible to `role`.
    #[must_use]
    pub fn owner_for(&self, role: Role) -> Option<Owner> {
        match role {
            Role::Chief => Some(self.owner),
            Role::Detective => self.revealed.then_some(self.owner),
        }
    }

    pub(crate) fn owner(&self) -> Owner {
        self.owner
    }

    /// Flip the card face up. Returns its owner.
    pub(crate) fn reveal(&mut self) -> Owner {
        self.revealed = true;
        self.owner
    }
}

/// One line of the key card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEntry {
    pub position: Position,
    pub word: Word,
    pub owner: Owner,
    pub revealed: bool,
}

/// Full owner-per-position mapping, only handed out to Chiefs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyCard {
    entries: Vec<KeyEntry>,
}

impl KeyCard {
    pub(crate) fn new(entries: Vec<KeyEntry>) -> Self {
        Self { entries }
    }

    /// Entries in row-major order.
    #[must_use]
    pub fn entries(&self) -> &[KeyEntry] {
        &self.entries
    }

    #[must_use]
    pub fn owner_at(&self, position: Position) -> Option<Owner> {
        position
            .index()
            .and_then(|i| self.entries.get(i))
            .map(|e| e.owner)
    }

    /// Positions owned by `owner`, in row-major order.
    pub fn positions_of(&self, owner: Owner) -> impl Iterator<Item = Position> + '_ {
        self.entries
            .iter()
            .filter(move |e| e.owner == owner)
            .map(|e| e.position)
    }

    /// The entry holding `word`, compared normalized.
    #[must_use]
    pub fn find(&self, word: &str) -> Option<&KeyEntry> {
        let needle = Word::new(word);
        self.entries.iter().find(|e| e.word == needle)
    }
}
