//! The vocabulary a match draws its board words from.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{GameError, GameRng, Result, Word, BOARD_CARDS};

const BUILTIN_WORDS: &str = include_str!("../../data/words.txt");

/// Why a line of a word list was dropped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// Blank line.
    Empty,
    /// Same normalized word as an earlier line.
    Duplicate { first_line: usize },
    /// Something other than letters, hyphens or apostrophes.
    InvalidCharacters,
    /// Fewer than two characters.
    TooShort,
}

/// A dropped line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    /// 1-based line number.
    pub line: usize,
    pub text: String,
    pub reason: RejectReason,
}

/// Outcome of loading a word list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    pub accepted: usize,
    pub rejected: Vec<Rejection>,
}

impl LoadReport {
    /// Rejections excluding blank lines.
    pub fn significant_rejections(&self) -> impl Iterator<Item = &Rejection> {
        self.rejected
            .iter()
            .filter(|r| r.reason != RejectReason::Empty)
    }
}

/// A validated, duplicate-free vocabulary.
///
/// ```
/// use word_detective::core::GameRng;
/// use word_detective::words::WordPool;
///
/// let pool = WordPool::builtin().unwrap();
/// let mut rng = GameRng::new(42);
/// let words = pool.draw(25, &mut rng).unwrap();
/// assert_eq!(words.len(), 25);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPool {
    words: Vec<Word>,
}

impl WordPool {
    /// Smallest pool a match can be dealt from.
    pub const MIN_WORDS: usize = BOARD_CARDS;

    /// The vocabulary shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_WORDS).map(|(pool, _)| pool)
    }

    /// Load a newline-separated word list.
    pub fn parse(text: &str) -> Result<(Self, LoadReport)> {
        Self::from_lines(text.lines())
    }

    /// Load words line by line.
    ///
    /// Invalid and duplicate lines are dropped and listed in the report.
    /// Fails only when fewer than `MIN_WORDS` words survive.
    pub fn from_lines<I, S>(lines: I) -> Result<(Self, LoadReport)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut seen: FxHashMap<String, usize> = FxHashMap::default();
        let mut report = LoadReport::default();

        for (idx, line) in lines.into_iter().enumerate() {
            let line_no = idx + 1;
            let word = Word::new(line.as_ref());

            let reason = if word.is_empty() {
                Some(RejectReason::Empty)
            } else if !word.has_word_characters() {
                Some(RejectReason::InvalidCharacters)
            } else if word.len() < 2 {
                Some(RejectReason::TooShort)
            } else if let Some(&first_line) = seen.get(word.normalized()) {
                Some(RejectReason::Duplicate { first_line })
            } else {
                None
            };

            match reason {
                Some(RejectReason::Empty) => {
                    report.rejected.push(Rejection {
                        line: line_no,
                        text: String::new(),
                        reason: RejectReason::Empty,
                    });
                }
                Some(reason) => {
                    warn!(line = line_no, text = word.display(), ?reason, "dropping word");
                    report.rejected.push(Rejection {
                        line: line_no,
                        text: word.display().to_string(),
                        reason,
                    });
                }
                None => {
                    seen.insert(word.normalized().to_string(), line_no);
                    words.push(word);
                }
            }
        }

        report.accepted = words.len();
        if words.len() < Self::MIN_WORDS {
            return Err(GameError::InvalidWordList {
                valid: words.len(),
                required: Self::MIN_WORDS,
            });
        }

        debug!(
            accepted = report.accepted,
            rejected = report.rejected.len(),
            "word list loaded"
        );
        Ok((Self { words }, report))
    }

    /// Build a pool from words a caller already validated.
    ///
    /// Still rejects duplicates and pools too small for a board.
    pub fn from_words(words: Vec<Word>) -> Result<Self> {
        let mut seen = rustc_hash::FxHashSet::default();
        for word in &words {
            if !seen.insert(word.normalized()) {
                return Err(GameError::DuplicateWord {
                    word: word.display().to_string(),
                });
            }
        }
        if words.len() < Self::MIN_WORDS {
            return Err(GameError::InvalidWordList {
                valid: words.len(),
                required: Self::MIN_WORDS,
            });
        }
        Ok(Self { words })
    }

    /// Draw `n` distinct words at random.
    pub fn draw(&self, n: usize, rng: &mut GameRng) -> Result<Vec<Word>> {
        if n > self.words.len() {
            return Err(GameError::InsufficientWords {
                requested: n,
                available: self.words.len(),
            });
        }
        Ok(rng
            .sample_indices(self.words.len(), n)
            .into_iter()
            .map(|i| self.words[i].clone())
            .collect())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let needle = Word::new(word);
        self.words.iter().any(|w| *w == needle)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> Vec<String> {
        // Letters only: "word" + base-26 suffix
        (0..n)
            .map(|i| {
                let a = (b'a' + (i / 26) as u8) as char;
                let b = (b'a' + (i % 26) as u8) as char;
                format!("word{a}{b}")
            })
            .collect()
    }

    #[test]
    fn test_builtin_pool_is_large_and_clean() {
        let (pool, report) = WordPool::parse(BUILTIN_WORDS).unwrap();
        assert!(pool.len() >= 300);
        assert_eq!(report.significant_rejections().count(), 0);
    }

    #[test]
    fn test_rejections_are_reported() {
        let mut lines = numbered(25);
        lines.push(String::new());
        lines.push("WORDAA".to_string());
        lines.push("r2d2".to_string());
        lines.push("x".to_string());

        let (pool, report) = WordPool::from_lines(&lines).unwrap();
        assert_eq!(pool.len(), 25);
        assert_eq!(report.accepted, 25);

        let reasons: Vec<_> = report.rejected.iter().map(|r| r.reason.clone()).collect();
        assert_eq!(
            reasons,
            vec![
                RejectReason::Empty,
                RejectReason::Duplicate { first_line: 1 },
                RejectReason::InvalidCharacters,
                RejectReason::TooShort,
            ]
        );
        assert_eq!(report.significant_rejections().count(), 3);
    }

    #[test]
    fn test_too_few_valid_words() {
        let mut lines = numbered(24);
        lines.push("worda!".to_string());
        let err = WordPool::from_lines(&lines).unwrap_err();
        assert_eq!(err, GameError::InvalidWordList { valid: 24, required: 25 });
    }

    #[test]
    fn test_from_words_rejects_duplicates() {
        let mut words: Vec<Word> = numbered(25).into_iter().map(Word::from).collect();
        words.push(Word::new("WORDAB"));
        let err = WordPool::from_words(words).unwrap_err();
        assert!(matches!(err, GameError::DuplicateWord { .. }));
    }

    #[test]
    fn test_draw_distinct() {
        let pool = WordPool::builtin().unwrap();
        let mut rng = GameRng::new(3);
        let drawn = pool.draw(25, &mut rng).unwrap();

        let unique: rustc_hash::FxHashSet<_> = drawn.iter().collect();
        assert_eq!(unique.len(), 25);
        assert!(drawn.iter().all(|w| pool.contains(w.display())));
    }

    #[test]
    fn test_draw_is_seeded() {
        let pool = WordPool::builtin().unwrap();
        let a = pool.draw(25, &mut GameRng::new(11)).unwrap();
        let b = pool.draw(25, &mut GameRng::new(11)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_draw_too_many() {
        let pool = WordPool::from_lines(numbered(25)).unwrap().0;
        let err = pool.draw(26, &mut GameRng::new(1)).unwrap_err();
        assert_eq!(err, GameError::InsufficientWords { requested: 26, available: 25 });
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let pool = WordPool::builtin().unwrap();
        assert!(pool.contains("ocean"));
        assert!(pool.contains(" OCEAN "));
        assert!(!pool.contains("xylophone"));
    }
}
