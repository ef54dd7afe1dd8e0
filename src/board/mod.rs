//! The board: cards, grid positions, key card and board generation.

pub mod card;
pub mod generator;
pub mod grid;

pub use card::{Card, KeyCard, KeyEntry, Owner, Position};
pub use generator::{generate_board, BoardGenerator};
pub use grid::Board;
