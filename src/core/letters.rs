//! Letter multisets
//!
//! `LetterCounts` records how many times each letter occurs in a word. Two words
//! are anagrams exactly when their counts are equal, and the number of letters
//! two words share is the overlap of their counts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Multiset of the letters of a normalized word
///
/// Keys are kept sorted so equal multisets compare, hash and serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LetterCounts(BTreeMap<char, u32>);

impl LetterCounts {
    /// Count the letters of `word`
    ///
    /// # Examples
    /// ```
    /// use wordplay::core::LetterCounts;
    ///
    /// let counts = LetterCounts::from_word("speed");
    /// assert_eq!(counts.get('e'), 2);
    /// assert_eq!(counts.get('z'), 0);
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts = BTreeMap::new();
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self(counts)
    }

    /// Occurrences of `letter` (zero when absent)
    #[inline]
    #[must_use]
    pub fn get(&self, letter: char) -> u32 {
        self.0.get(&letter).copied().unwrap_or(0)
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.0.len()
    }

    /// Total number of letters, counting repeats
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    /// Iterate `(letter, count)` in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        self.0.iter().map(|(&letter, &count)| (letter, count))
    }

    /// Shared-letter total: Σ min(self\[letter\], other\[letter\])
    ///
    /// Letters missing from either side contribute nothing, so summing over
    /// `self` alone covers every letter present in either word.
    ///
    /// # Examples
    /// ```
    /// use wordplay::core::LetterCounts;
    ///
    /// let speed = LetterCounts::from_word("speed");
    /// let erase = LetterCounts::from_word("erase");
    /// assert_eq!(speed.overlap(&erase), 3); // s, e, e
    /// ```
    #[must_use]
    pub fn overlap(&self, other: &Self) -> u32 {
        self.iter()
            .map(|(letter, count)| count.min(other.get(letter)))
            .sum()
    }

    /// True when every letter of `other` occurs in `self` at least as often
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        other
            .iter()
            .all(|(letter, count)| self.get(letter) >= count)
    }
}
