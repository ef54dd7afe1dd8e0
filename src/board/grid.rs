//! The 5x5 board.
//!
//! Cards live in an `im::Vector` in row-major order, so cloning a board (and
//! therefore a whole game state) is O(1) and revealing a card only copies the
//! touched chunk.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::{Card, KeyCard, KeyEntry, Owner, Position};
use crate::core::{GameError, Result, Role, TeamColor, Word, BOARD_CARDS};

/// Ordered collection of exactly 25 cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cards: Vector<Card>,
    starting_team: TeamColor,
}

impl Board {
    /// Build a board from words and owners, both in row-major order.
    ///
    /// Used by the generator and for hand-built fixtures. Requires 25
    /// distinct words, exactly one failure card and at least one card per
    /// team.
    pub fn from_key(words: Vec<Word>, key: Vec<Owner>, starting_team: TeamColor) -> Result<Self> {
        if words.len() != BOARD_CARDS {
            return Err(GameError::InvalidWordCount {
                expected: BOARD_CARDS,
                actual: words.len(),
            });
        }
        if key.len() != BOARD_CARDS {
            return Err(GameError::InvalidLayout {
                reason: format!("key has {} entries, expected {}", key.len(), BOARD_CARDS),
            });
        }

        {
            let mut seen = FxHashSet::default();
            for word in &words {
                if !seen.insert(word.normalized()) {
                    return Err(GameError::DuplicateWord {
                        word: word.display().to_string(),
                    });
                }
            }
        }

        let failures = key.iter().filter(|&&o| o == Owner::Failure).count();
        if failures != 1 {
            return Err(GameError::InvalidLayout {
                reason: format!("expected exactly 1 failure card, got {failures}"),
            });
        }
        for color in TeamColor::ALL {
            if !key.contains(&Owner::Team(color)) {
                return Err(GameError::InvalidLayout {
                    reason: format!("{color} owns no cards"),
                });
            }
        }

        let cards = words
            .into_iter()
            .zip(key)
            .enumerate()
            .map(|(i, (word, owner))| Card::new(word, owner, Position::from_index(i)))
            .collect();

        Ok(Self {
            cards,
            starting_team,
        })
    }

    /// Team that gives the first clue.
    #[must_use]
    pub fn starting_team(&self) -> TeamColor {
        self.starting_team
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in row-major order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[must_use]
    pub fn card_at(&self, position: Position) -> Option<&Card> {
        position.index().and_then(|i| self.cards.get(i))
    }

    /// The card showing `word`, compared normalized.
    #[must_use]
    pub fn find_word(&self, word: &str) -> Option<&Card> {
        let needle = Word::new(word);
        self.cards.iter().find(|c| *c.word() == needle)
    }

    /// Words of cards still face down.
    #[must_use]
    pub fn unrevealed_words(&self) -> Vec<Word> {
        self.cards
            .iter()
            .filter(|c| !c.is_revealed())
            .map(|c| c.word().clone())
            .collect()
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_revealed()).count()
    }

    /// How many cards `owner` holds on this board.
    #[must_use]
    pub fn count_of(&self, owner: Owner) -> usize {
        self.cards.iter().filter(|c| c.owner() == owner).count()
    }

    /// How many of `owner`'s cards are still face down.
    #[must_use]
    pub fn remaining_for(&self, owner: Owner) -> usize {
        self.cards
            .iter()
            .filter(|c| c.owner() == owner && !c.is_revealed())
            .count()
    }

    /// The key card, for Chiefs only.
    #[must_use]
    pub fn key_card(&self, role: Role) -> Option<KeyCard> {
        match role {
            Role::Chief => Some(KeyCard::new(
                self.cards
                    .iter()
                    .map(|c| KeyEntry {
                        position: c.position(),
                        word: c.word().clone(),
                        owner: c.owner(),
                        revealed: c.is_revealed(),
                    })
                    .collect(),
            )),
            Role::Detective => None,
        }
    }

    /// Reveal the card at `position` and return its owner.
    pub(crate) fn reveal(&mut self, position: Position) -> Result<Owner> {
        let index = position
            .index()
            .ok_or(GameError::InvalidPosition { position })?;
        let card = self
            .cards
            .get_mut(index)
            .ok_or(GameError::InvalidPosition { position })?;
        if card.is_revealed() {
            return Err(GameError::AlreadyRevealed { position });
        }
        Ok(card.reveal())
    }
}
