//! Words as they appear on cards and in clues.
//!
//! A `Word` keeps the text it was created from for display, plus a normalized
//! form (trimmed, lower-cased) used for every comparison.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable word token.
///
/// Equality and hashing use the normalized form only, so `"Ocean"` and
/// `" ocean "` are the same word.
///
/// ```
/// use word_detective::core::Word;
///
/// let a = Word::new("Ocean");
/// let b = Word::new("  ocean ");
/// assert_eq!(a, b);
/// assert_eq!(a.display(), "Ocean");
/// assert_eq!(a.normalized(), "ocean");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Word {
    display: String,
    normalized: String,
}

impl Word {
    /// Create a word from raw text.
    pub fn new(text: impl AsRef<str>) -> Self {
        let display = text.as_ref().trim().to_string();
        let normalized = normalize(&display);
        Self {
            display,
            normalized,
        }
    }

    /// The trimmed text as originally written.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Trimmed, lower-cased form used for comparisons.
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Number of characters in the normalized form.
    #[must_use]
    pub fn len(&self) -> usize {
        self.normalized.chars().count()
    }

    /// True for a word made only of whitespace.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// True if the word contains embedded whitespace.
    #[must_use]
    pub fn is_multi_token(&self) -> bool {
        self.normalized.chars().any(char::is_whitespace)
    }

    /// True if the word has at least one letter and nothing but letters,
    /// hyphens and apostrophes.
    #[must_use]
    pub fn has_word_characters(&self) -> bool {
        self.normalized.chars().any(char::is_alphabetic)
            && self
                .normalized
                .chars()
                .all(|c| c.is_alphabetic() || c == '-' || c == '\'')
    }
}

/// Normalize text the way `Word` does.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for Word {}

impl std::hash::Hash for Word {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Word {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        let word = Word::new("  Lighthouse\t");
        assert_eq!(word.display(), "Lighthouse");
        assert_eq!(word.normalized(), "lighthouse");
        assert_eq!(word.len(), 10);
    }

    #[test]
    fn test_equality_ignores_case() {
        assert_eq!(Word::new("TIDE"), Word::new("tide"));
        assert_ne!(Word::new("tide"), Word::new("tides"));
    }

    #[test]
    fn test_hash_matches_equality() {
        use rustc_hash::FxHashSet;

        let mut set = FxHashSet::default();
        set.insert(Word::new("Wave"));
        assert!(set.contains(&Word::new("wave")));
    }

    #[test]
    fn test_multi_token() {
        assert!(Word::new("ice cream").is_multi_token());
        assert!(!Word::new(" ice ").is_multi_token());
    }

    #[test]
    fn test_word_characters() {
        assert!(Word::new("rock-n-roll").has_word_characters());
        assert!(Word::new("o'clock").has_word_characters());
        assert!(!Word::new("r2d2").has_word_characters());
        assert!(!Word::new("hello!").has_word_characters());
        assert!(!Word::new("--").has_word_characters());
        assert!(!Word::new("'-'").has_word_characters());
    }

    #[test]
    fn test_empty() {
        assert!(Word::new("   ").is_empty());
        assert!(!Word::new("a").is_empty());
    }

    #[test]
    fn test_serialization() {
        let word = Word::new("Ocean");
        let json = serde_json::to_string(&word).unwrap();
        let back: Word = serde_json::from_str(&json).unwrap();
        assert_eq!(back, word);
        assert_eq!(back.display(), "Ocean");
    }
}
