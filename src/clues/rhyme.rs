//! Rhyme detection.
//!
//! Rhyme detection is approximate by nature. The validator takes any
//! `RhymeStrategy`, so a better heuristic (or a dictionary-backed one) can be
//! swapped in without touching the rules engine.
//!
//! The default `SuffixRhyme` is best-effort, not phonetically exhaustive.
//! Two normalized words rhyme when:
//! - their stems match after dropping a plural `s`/`es` ("oceans", "ocean"),
//! - their rimes match and are at least two letters long. The rime is the last
//!   vowel group plus the consonants after it, skipping a silent final `e`
//!   ("tide" -> "ide", "ocean" -> "ean", "cat" -> "at"),
//! - or both have four or more letters and share their last three.
//!
//! Words shorter than three letters only rhyme with themselves.

use smallvec::SmallVec;

/// Decides whether two normalized words rhyme.
///
/// Implemented for any `Fn(&str, &str) -> bool`:
///
/// ```
/// use word_detective::clues::RhymeStrategy;
///
/// let never = |_: &str, _: &str| false;
/// assert!(!never.rhymes("cat", "hat"));
/// ```
pub trait RhymeStrategy {
    fn rhymes(&self, a: &str, b: &str) -> bool;
}

impl<F> RhymeStrategy for F
where
    F: Fn(&str, &str) -> bool,
{
    fn rhymes(&self, a: &str, b: &str) -> bool {
        self(a, b)
    }
}

/// Suffix and rime based heuristic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SuffixRhyme;

impl RhymeStrategy for SuffixRhyme {
    fn rhymes(&self, a: &str, b: &str) -> bool {
        if a == b {
            return true;
        }

        let (stems_a, stems_b) = (stems(a), stems(b));
        if stems_a.iter().any(|s| stems_b.contains(s)) {
            return true;
        }

        let (sa, sb) = (stems_a[stems_a.len().min(2) - 1], stems_b[stems_b.len().min(2) - 1]);
        let (la, lb) = (sa.chars().count(), sb.chars().count());
        if la < 3 || lb < 3 {
            return false;
        }

        if let (Some(ra), Some(rb)) = (rime(sa), rime(sb)) {
            if ra.chars().count() >= 2 && ra == rb {
                return true;
            }
        }

        la >= 4 && lb >= 4 && last_chars(sa, 3) == last_chars(sb, 3)
    }
}

/// The word plus the forms left after dropping a plural `s` or `es`.
///
/// The second entry, when present, is the `s`-stripped singular.
fn stems(word: &str) -> SmallVec<[&str; 3]> {
    let mut out = SmallVec::new();
    out.push(word);
    if word.len() > 3 && word.ends_with('s') && !word.ends_with("ss") {
        out.push(&word[..word.len() - 1]);
        if word.len() > 4 && word.ends_with("es") {
            out.push(&word[..word.len() - 2]);
        }
    }
    out
}

fn is_vowel(c: char, index: usize) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u') || (c == 'y' && index > 0)
}

/// Last vowel group plus trailing consonants, skipping a silent final `e`.
fn rime(word: &str) -> Option<String> {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    if n == 0 {
        return None;
    }

    let silent_e = n > 2 && chars[n - 1] == 'e' && !is_vowel(chars[n - 2], n - 2);
    let search_end = if silent_e { n - 1 } else { n };

    let last_vowel = (0..search_end).rev().find(|&i| is_vowel(chars[i], i))?;
    let mut start = last_vowel;
    while start > 0 && is_vowel(chars[start - 1], start - 1) {
        start -= 1;
    }

    Some(chars[start..].iter().collect())
}

fn last_chars(word: &str, count: usize) -> String {
    let chars: Vec<char> = word.chars().collect();
    chars[chars.len().saturating_sub(count)..].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rhymes(a: &str, b: &str) -> bool {
        SuffixRhyme.rhymes(a, b)
    }

    #[test]
    fn test_trailing_s() {
        assert!(rhymes("oceans", "ocean"));
        assert!(rhymes("wave", "waves"));
        assert!(rhymes("boxes", "box"));
    }

    #[test]
    fn test_rime_match() {
        assert!(rhymes("cat", "hat"));
        assert!(rhymes("tide", "wide"));
        assert!(rhymes("bean", "ocean"));
        assert!(rhymes("tree", "free"));
        assert!(rhymes("book", "cook"));
    }

    #[test]
    fn test_shared_suffix() {
        assert!(rhymes("happy", "snappy"));
        assert!(rhymes("running", "jumping"));
    }

    #[test]
    fn test_non_rhymes() {
        assert!(!rhymes("ocean", "wave"));
        assert!(!rhymes("sea", "ocean"));
        assert!(!rhymes("table", "apple"));
        assert!(!rhymes("cat", "dog"));
    }

    #[test]
    fn test_short_words() {
        assert!(!rhymes("at", "cat"));
        assert!(rhymes("at", "at"));
        assert!(!rhymes("ox", "box"));
    }

    #[test]
    fn test_stems() {
        assert_eq!(stems("glass").as_slice(), &["glass"]);
        assert_eq!(stems("cats").as_slice(), &["cats", "cat"]);
        assert_eq!(stems("bus").as_slice(), &["bus"]);
        assert_eq!(stems("churches").as_slice(), &["churches", "churche", "church"]);
    }

    #[test]
    fn test_plural_of_e_ending_word() {
        assert!(rhymes("lighthouses", "lighthouse"));
        assert!(rhymes("houses", "house"));
    }

    #[test]
    fn test_rime() {
        assert_eq!(rime("tide").as_deref(), Some("ide"));
        assert_eq!(rime("ocean").as_deref(), Some("ean"));
        assert_eq!(rime("tree").as_deref(), Some("ee"));
        assert_eq!(rime("happy").as_deref(), Some("y"));
        assert_eq!(rime("psst"), None);
    }

    #[test]
    fn test_closure_strategy() {
        let first_letter = |a: &str, b: &str| a.chars().next() == b.chars().next();
        assert!(first_letter.rhymes("sea", "ship"));
        assert!(!first_letter.rhymes("sea", "wave"));
    }
}
