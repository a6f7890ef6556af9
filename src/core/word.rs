//! Word record representation
//!
//! A `WordRecord` holds the lexical facts of one input token, fixed at
//! construction, plus the relations accumulated while it is compared against
//! the other words of its length.

use super::{LetterCounts, PairScore, Similarity};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One qualifying input token and its accumulated relations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    original: String,
    normalized: String,
    length: usize,
    counts: LetterCounts,
    acronym: bool,
    proper: bool,
    palindrome: bool,
    /// Raw keys of the records found to be anagrams of this one
    anagrams: Vec<String>,
    similarity: Similarity,
}

/// Error type for tokens that fail the qualification filter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must have at least {min} letters, got {len}")]
    TooShort { len: usize, min: usize },
    #[error("word must contain only ASCII letters")]
    InvalidCharacters,
}

impl WordRecord {
    /// Create a record from a non-empty, purely alphabetic token
    ///
    /// # Errors
    /// Returns `WordError` if the token is empty or contains anything other
    /// than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordplay::core::WordRecord;
    ///
    /// let word = WordRecord::new("Level").unwrap();
    /// assert_eq!(word.original(), "Level");
    /// assert_eq!(word.normalized(), "level");
    /// assert!(word.is_proper());
    /// assert!(word.is_palindrome());
    ///
    /// assert!(WordRecord::new("don't").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        Self::with_min_len(text, 1)
    }

    /// Create a record, additionally requiring at least `min_len` letters
    ///
    /// A zero `min_len` still rejects the empty token.
    ///
    /// # Errors
    /// Returns `WordError::TooShort` below the minimum length and
    /// `WordError::InvalidCharacters` for digits, punctuation, whitespace or
    /// non-ASCII letters.
    pub fn with_min_len(text: impl Into<String>, min_len: usize) -> Result<Self, WordError> {
        let original: String = text.into();

        if !original.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        // ASCII only from here on, so byte length is character length
        let min = min_len.max(1);
        if original.len() < min {
            return Err(WordError::TooShort {
                len: original.len(),
                min,
            });
        }

        let normalized = original.to_ascii_lowercase();
        let acronym = original.bytes().all(|b| b.is_ascii_uppercase());
        let proper = !acronym && original.as_bytes()[0].is_ascii_uppercase();
        let palindrome = normalized.bytes().eq(normalized.bytes().rev());
        let counts = LetterCounts::from_word(&normalized);

        Ok(Self {
            length: normalized.len(),
            original,
            normalized,
            counts,
            acronym,
            proper,
            palindrome,
            anagrams: Vec::new(),
            similarity: Similarity::default(),
        })
    }

    /// The token exactly as read; also its identity key in a collection
    #[inline]
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Lowercase form used for every comparison
    #[inline]
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub const fn counts(&self) -> &LetterCounts {
        &self.counts
    }

    /// Entirely uppercase, e.g. `NASA`
    #[inline]
    #[must_use]
    pub const fn is_acronym(&self) -> bool {
        self.acronym
    }

    /// Capitalised but not an acronym, e.g. `Paris`
    #[inline]
    #[must_use]
    pub const fn is_proper(&self) -> bool {
        self.proper
    }

    #[inline]
    #[must_use]
    pub const fn is_palindrome(&self) -> bool {
        self.palindrome
    }

    /// Raw keys of anagram partners, in discovery order
    #[inline]
    #[must_use]
    pub fn anagrams(&self) -> &[String] {
        &self.anagrams
    }

    #[inline]
    #[must_use]
    pub const fn similarity(&self) -> Similarity {
        self.similarity
    }

    /// Same letters with the same multiplicities
    #[must_use]
    pub fn is_anagram_of(&self, other: &Self) -> bool {
        self.counts == other.counts
    }

    /// Every letter of `other` is available in `self`
    ///
    /// # Examples
    /// ```
    /// use wordplay::core::WordRecord;
    ///
    /// let letters = WordRecord::new("letters").unwrap();
    /// assert!(letters.contains_letters_of(&WordRecord::new("reset").unwrap()));
    /// assert!(!letters.contains_letters_of(&WordRecord::new("sweet").unwrap()));
    /// ```
    #[must_use]
    pub fn contains_letters_of(&self, other: &Self) -> bool {
        self.counts.contains(&other.counts)
    }

    /// Fold one comparison against `partner` into this record
    pub(crate) fn absorb(&mut self, partner: &str, score: PairScore) {
        if score.anagram {
            self.anagrams.push(partner.to_string());
        }
        self.similarity += score;
    }
}

impl fmt::Display for WordRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_creation_valid() {
        let word = WordRecord::new("crane").unwrap();
        assert_eq!(word.original(), "crane");
        assert_eq!(word.normalized(), "crane");
        assert_eq!(word.length(), 5);
        assert!(word.anagrams().is_empty());
        assert_eq!(word.similarity(), Similarity::default());
    }

    #[test]
    fn record_keeps_original_case() {
        let word = WordRecord::new("CrAnE").unwrap();
        assert_eq!(word.original(), "CrAnE");
        assert_eq!(word.normalized(), "crane");
    }

    #[test]
    fn record_creation_invalid_characters() {
        for bad in ["cran3", "cran ", "cran!", "co-op", "café", "\tcat"] {
            assert_eq!(
                WordRecord::new(bad),
                Err(WordError::InvalidCharacters),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn record_creation_too_short() {
        assert_eq!(
            WordRecord::with_min_len("at", 3),
            Err(WordError::TooShort { len: 2, min: 3 })
        );
        assert!(WordRecord::with_min_len("ant", 3).is_ok());
    }

    #[test]
    fn empty_token_always_rejected() {
        assert!(WordRecord::new("").is_err());
        assert!(WordRecord::with_min_len("", 0).is_err());
    }

    #[test]
    fn acronym_and_proper_flags() {
        let nasa = WordRecord::new("NASA").unwrap();
        assert!(nasa.is_acronym());
        assert!(!nasa.is_proper());

        let paris = WordRecord::new("Paris").unwrap();
        assert!(!paris.is_acronym());
        assert!(paris.is_proper());

        let plain = WordRecord::new("paris").unwrap();
        assert!(!plain.is_acronym());
        assert!(!plain.is_proper());

        // Uppercase later in the word does not make it proper
        let camel = WordRecord::new("iPod").unwrap();
        assert!(!camel.is_acronym());
        assert!(!camel.is_proper());
    }

    #[test]
    fn palindromes_ignore_case() {
        assert!(WordRecord::new("Racecar").unwrap().is_palindrome());
        assert!(WordRecord::new("noon").unwrap().is_palindrome());
        assert!(!WordRecord::new("moon").unwrap().is_palindrome());
    }

    #[test]
    fn letter_counts_use_normalized_form() {
        let word = WordRecord::new("Anna").unwrap();
        assert_eq!(word.counts().get('a'), 2);
        assert_eq!(word.counts().get('n'), 2);
        assert_eq!(word.counts().get('A'), 0);
    }

    #[test]
    fn anagram_detection() {
        let listen = WordRecord::new("listen").unwrap();
        let silent = WordRecord::new("Silent").unwrap();
        let enlist = WordRecord::new("enlist").unwrap();
        let lister = WordRecord::new("lister").unwrap();

        assert!(listen.is_anagram_of(&silent));
        assert!(silent.is_anagram_of(&enlist));
        assert!(!listen.is_anagram_of(&lister));
    }

    #[test]
    fn subword_containment() {
        let chapter = WordRecord::new("chapter").unwrap();
        assert!(chapter.contains_letters_of(&WordRecord::new("cheap").unwrap()));
        assert!(chapter.contains_letters_of(&WordRecord::new("Patch").unwrap()));
        assert!(chapter.contains_letters_of(&WordRecord::new("patcher").unwrap()));
        assert!(!chapter.contains_letters_of(&WordRecord::new("chapters").unwrap()));
        assert!(!WordRecord::new("cheap").unwrap().contains_letters_of(&chapter));
    }

    #[test]
    fn absorb_updates_relations() {
        let mut cat = WordRecord::new("cat").unwrap();
        let act = WordRecord::new("act").unwrap();
        let dog = WordRecord::new("dog").unwrap();

        cat.absorb(act.original(), PairScore::calculate(&cat, &act).unwrap());
        cat.absorb(dog.original(), PairScore::calculate(&cat, &dog).unwrap());

        assert_eq!(cat.anagrams(), ["act".to_string()]);
        assert_eq!(cat.similarity(), Similarity::new(1, 3));
    }

    #[test]
    fn record_display() {
        let word = WordRecord::new("Crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
