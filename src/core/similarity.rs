//! Wordle-style comparison between two words of the same length
//!
//! Comparing two words yields a `PairScore`:
//! - `position`: indices where both words carry the same letter (greens)
//! - `common`: shared letters regardless of position, multiplicity-aware
//! - `anagram`: whether the two letter multisets are identical
//!
//! Each word accumulates the scores of all its comparisons in a `Similarity`,
//! a pair of counters that only ever grow by addition, so the order in which
//! pairs are visited never changes the totals.

use super::WordRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::AddAssign;

/// Result of comparing one pair of equal-length words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairScore {
    pub position: u32,
    pub common: u32,
    pub anagram: bool,
}

impl PairScore {
    /// Compare two words
    ///
    /// Returns `None` when the words differ in length: position matches are
    /// only defined for words of equal length.
    ///
    /// # Examples
    /// ```
    /// use wordplay::core::{PairScore, WordRecord};
    ///
    /// let cat = WordRecord::new("cat").unwrap();
    /// let act = WordRecord::new("act").unwrap();
    /// let score = PairScore::calculate(&cat, &act).unwrap();
    ///
    /// assert_eq!(score.position, 1); // only the trailing t lines up
    /// assert_eq!(score.common, 3);
    /// assert!(score.anagram);
    /// ```
    #[must_use]
    pub fn calculate(a: &WordRecord, b: &WordRecord) -> Option<Self> {
        if a.length() != b.length() {
            return None;
        }

        let position = a
            .normalized()
            .bytes()
            .zip(b.normalized().bytes())
            .filter(|(x, y)| x == y)
            .count() as u32;

        Some(Self {
            position,
            common: a.counts().overlap(b.counts()),
            anagram: a.counts() == b.counts(),
        })
    }
}

/// Running wordle totals for one word
///
/// Serialized as `{"position": .., "common": ..}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Similarity {
    position: u64,
    common: u64,
}

impl Similarity {
    #[must_use]
    pub const fn new(position: u64, common: u64) -> Self {
        Self { position, common }
    }

    /// Sum of position matches against every compared word
    #[inline]
    #[must_use]
    pub const fn position(self) -> u64 {
        self.position
    }

    /// Sum of shared letters against every compared word
    #[inline]
    #[must_use]
    pub const fn common(self) -> u64 {
        self.common
    }
}

impl AddAssign<PairScore> for Similarity {
    fn add_assign(&mut self, score: PairScore) {
        self.position += u64::from(score.position);
        self.common += u64::from(score.common);
    }
}

impl fmt::Display for Similarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}/{})",
            group_thousands(self.position),
            group_thousands(self.common)
        )
    }
}

/// Render an integer with comma thousands separators
///
/// # Examples
/// ```
/// use wordplay::core::group_thousands;
///
/// assert_eq!(group_thousands(1_234_567), "1,234,567");
/// assert_eq!(group_thousands(999), "999");
/// ```
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(a: &str, b: &str) -> Option<PairScore> {
        let a = WordRecord::new(a).unwrap();
        let b = WordRecord::new(b).unwrap();
        PairScore::calculate(&a, &b)
    }

    #[test]
    fn disjoint_words_score_zero() {
        let s = score("cat", "dog").unwrap();
        assert_eq!(s.position, 0);
        assert_eq!(s.common, 0);
        assert!(!s.anagram);
    }

    #[test]
    fn identical_normalized_words_match_everywhere() {
        // Case is folded before comparison
        let s = score("Cat", "cat").unwrap();
        assert_eq!(s.position, 3);
        assert_eq!(s.common, 3);
        assert!(s.anagram);
    }

    #[test]
    fn duplicate_letters_limited_by_rarer_side() {
        // SPEED vs ERASE: only s and two e's are shared, nothing lines up
        let s = score("speed", "erase").unwrap();
        assert_eq!(s.position, 0);
        assert_eq!(s.common, 3);
        assert!(!s.anagram);
    }

    #[test]
    fn partial_position_match() {
        // CRANE vs SLATE: a and e line up; a and e are the only shared letters
        let s = score("crane", "slate").unwrap();
        assert_eq!(s.position, 2);
        assert_eq!(s.common, 2);
    }

    #[test]
    fn score_is_symmetric() {
        for (a, b) in [("robot", "floor"), ("listen", "silent"), ("abc", "cab")] {
            assert_eq!(score(a, b), score(b, a));
        }
    }

    #[test]
    fn different_lengths_are_not_compared() {
        assert!(score("cat", "cats").is_none());
    }

    #[test]
    fn similarity_accumulates() {
        let mut total = Similarity::default();
        total += score("cat", "act").unwrap();
        total += score("cat", "cat").unwrap();
        total += score("cat", "dog").unwrap();
        assert_eq!(total.position(), 4);
        assert_eq!(total.common(), 6);
    }

    #[test]
    fn similarity_display_groups_digits() {
        let sim = Similarity::new(1234, 5_678_901);
        assert_eq!(sim.to_string(), "(1,234/5,678,901)");
        assert_eq!(Similarity::default().to_string(), "(0/0)");
    }

    #[test]
    fn group_thousands_boundaries() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(100), "100");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(100_000), "100,000");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
    }
}
