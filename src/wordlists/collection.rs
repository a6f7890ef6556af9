//! The canonical word collection
//!
//! Owns every `WordRecord` keyed by its raw input line, in input order, plus
//! the length partition derived from them. Analysis workers never touch the
//! collection directly: they receive copies of one length class and the
//! scheduler merges their results back here.

use super::partition::{LengthClass, LengthPartition};
use crate::core::{LetterCounts, WordRecord, group_thousands};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use tracing::warn;

/// Every qualifying word of one source, with its relations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCollection {
    source: String,
    records: Vec<WordRecord>,
    index: FxHashMap<String, usize>,
    partition: LengthPartition,
    /// Lengths whose analysed class has been merged back
    analyzed: BTreeSet<usize>,
}

/// Aggregate counts over a collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub words: usize,
    pub classes: usize,
    pub pairs: u64,
    /// Distinct letter multisets shared by two or more words
    pub anagram_groups: usize,
    /// Words with at least one anagram partner
    pub words_with_anagrams: usize,
    pub palindromes: usize,
    pub proper: usize,
    pub acronyms: usize,
}

impl WordCollection {
    /// Build a collection from records in input order
    ///
    /// A record whose raw key was already seen replaces the earlier one in
    /// place, so duplicate lines collapse to a single record.
    ///
    /// # Examples
    /// ```
    /// use wordplay::core::WordRecord;
    /// use wordplay::wordlists::WordCollection;
    ///
    /// let records = ["cat", "dog", "cat"].map(|w| WordRecord::new(w).unwrap());
    /// let words = WordCollection::from_records("inline", records);
    /// assert_eq!(words.len(), 2);
    /// ```
    pub fn from_records(
        source: impl Into<String>,
        records: impl IntoIterator<Item = WordRecord>,
    ) -> Self {
        let mut slots: Vec<WordRecord> = Vec::new();
        let mut index: FxHashMap<String, usize> = FxHashMap::default();

        for record in records {
            match index.get(record.original()).copied() {
                Some(slot) => slots[slot] = record,
                None => {
                    index.insert(record.original().to_string(), slots.len());
                    slots.push(record);
                }
            }
        }

        let partition = LengthPartition::build(&slots);

        Self {
            source: source.into(),
            records: slots,
            index,
            partition,
            analyzed: BTreeSet::new(),
        }
    }

    /// Where the words were read from
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look a record up by its raw input line
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&WordRecord> {
        self.index.get(key).map(|&slot| &self.records[slot])
    }

    /// Records in input order (first occurrence of each raw line)
    pub fn iter(&self) -> impl Iterator<Item = &WordRecord> + '_ {
        self.records.iter()
    }

    #[must_use]
    pub const fn partition(&self) -> &LengthPartition {
        &self.partition
    }

    /// Records of one length, in input order
    pub fn records_of_length(&self, length: usize) -> impl Iterator<Item = &WordRecord> + '_ {
        self.partition
            .slots(length)
            .iter()
            .map(|&slot| &self.records[slot])
    }

    /// True once every length class has been analysed and merged
    #[must_use]
    pub fn is_analyzed(&self) -> bool {
        self.pending_lengths().next().is_none()
    }

    #[must_use]
    pub fn is_class_analyzed(&self, length: usize) -> bool {
        self.analyzed.contains(&length)
    }

    /// Lengths still awaiting analysis, shortest first
    pub fn pending_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.partition
            .lengths()
            .filter(|length| !self.analyzed.contains(length))
    }

    /// Normalized forms of a record's anagram partners, in discovery order
    #[must_use]
    pub fn anagram_words<'a>(&'a self, record: &'a WordRecord) -> Vec<&'a str> {
        record
            .anagrams()
            .iter()
            .filter_map(|key| self.get(key))
            .map(WordRecord::normalized)
            .collect()
    }

    /// Other records whose letters can all be drawn from the word at `key`
    ///
    /// Considers words of every length; returns an empty list for unknown keys.
    #[must_use]
    pub fn subwords_of(&self, key: &str) -> Vec<&WordRecord> {
        let Some(word) = self.get(key) else {
            return Vec::new();
        };

        self.records
            .iter()
            .filter(|other| other.original() != key && word.contains_letters_of(other))
            .collect()
    }

    /// Copy out every record of `length` as an independent unit of work
    #[must_use]
    pub fn class(&self, length: usize) -> LengthClass {
        LengthClass::new(length, self.records_of_length(length).cloned().collect())
    }

    /// Replace records with their analysed counterparts from `class` and
    /// mark its length as analysed
    ///
    /// Returns the number of records replaced.
    pub(crate) fn merge(&mut self, class: LengthClass) -> usize {
        let length = class.length();
        let mut merged = 0;

        for record in class.into_records() {
            match self.index.get(record.original()).copied() {
                Some(slot) => {
                    self.records[slot] = record;
                    merged += 1;
                }
                None => warn!(
                    length,
                    word = record.original(),
                    "Analysed record has no slot in the collection"
                ),
            }
        }

        self.analyzed.insert(length);
        merged
    }

    /// Check that the lookup index and partition agree with the records
    ///
    /// Always holds for a collection built in memory; a decoded snapshot
    /// is checked before use, since lookups index `records` by slot.
    pub(crate) fn check_consistency(&self) -> Result<(), String> {
        if self.index.len() != self.records.len() {
            return Err(format!(
                "{} index entries for {} records",
                self.index.len(),
                self.records.len()
            ));
        }

        for (key, &slot) in &self.index {
            match self.records.get(slot) {
                Some(record) if record.original() == key => {}
                Some(record) => {
                    return Err(format!(
                        "index maps {key:?} to slot {slot} holding {:?}",
                        record.original()
                    ));
                }
                None => return Err(format!("index maps {key:?} to missing slot {slot}")),
            }
        }

        if self.partition != LengthPartition::build(&self.records) {
            return Err("length partition does not match the records".to_string());
        }

        if let Some(length) = self
            .analyzed
            .iter()
            .find(|length| self.partition.slots(**length).is_empty())
        {
            return Err(format!("length {length} marked analysed but has no words"));
        }

        Ok(())
    }

    /// Aggregate counts; anagram figures reflect analysis done so far
    #[must_use]
    pub fn summary(&self) -> Summary {
        let mut groups: FxHashSet<&LetterCounts> = FxHashSet::default();
        let mut summary = Summary {
            words: self.records.len(),
            classes: self.partition.class_count(),
            pairs: self.partition.total_pairs(),
            ..Summary::default()
        };

        for record in &self.records {
            if !record.anagrams().is_empty() {
                summary.words_with_anagrams += 1;
                groups.insert(record.counts());
            }
            summary.palindromes += usize::from(record.is_palindrome());
            summary.proper += usize::from(record.is_proper());
            summary.acronyms += usize::from(record.is_acronym());
        }

        summary.anagram_groups = groups.len();
        summary
    }
}

impl<'a> IntoIterator for &'a WordCollection {
    type Item = &'a WordRecord;
    type IntoIter = std::slice::Iter<'a, WordRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl fmt::Display for WordCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WordList({} ({} words))",
            self.source,
            group_thousands(self.records.len() as u64)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(words: &[&str]) -> WordCollection {
        WordCollection::from_records("test", words.iter().map(|w| WordRecord::new(*w).unwrap()))
    }

    #[test]
    fn preserves_input_order() {
        let words = collection(&["zebra", "apple", "mango"]);
        let order: Vec<&str> = words.iter().map(WordRecord::original).collect();
        assert_eq!(order, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn duplicate_lines_collapse() {
        let words = collection(&["cat", "dog", "cat", "cat"]);
        assert_eq!(words.len(), 2);
        assert_eq!(words.partition().slots(3).len(), 2);
        assert!(words.get("cat").is_some());
    }

    #[test]
    fn case_variants_are_distinct_keys() {
        let words = collection(&["cat", "Cat", "CAT"]);
        assert_eq!(words.len(), 3);
        assert_eq!(words.get("Cat").unwrap().normalized(), "cat");
        assert!(words.get("CAT").unwrap().is_acronym());
        assert!(words.get("cAT").is_none());
    }

    #[test]
    fn records_of_length_follow_partition() {
        let words = collection(&["cat", "horse", "dog"]);
        let threes: Vec<&str> = words.records_of_length(3).map(WordRecord::original).collect();
        assert_eq!(threes, vec!["cat", "dog"]);
        assert_eq!(words.records_of_length(4).count(), 0);
    }

    #[test]
    fn class_copies_and_merge_replaces() {
        let mut words = collection(&["cat", "act", "horse"]);
        let mut class = words.class(3);
        assert_eq!(class.word_count(), 2);

        let [cat, act] = class.records_mut() else {
            panic!("expected two records");
        };
        let score = crate::core::PairScore::calculate(cat, act).unwrap();
        let (cat_key, act_key) = (cat.original().to_string(), act.original().to_string());
        cat.absorb(&act_key, score);
        act.absorb(&cat_key, score);

        // The collection is untouched until the class is merged back
        assert!(words.get("cat").unwrap().anagrams().is_empty());

        assert_eq!(words.merge(class), 2);
        assert_eq!(words.get("cat").unwrap().anagrams(), ["act".to_string()]);
        assert_eq!(words.anagram_words(words.get("act").unwrap()), vec!["cat"]);
        assert!(words.get("horse").unwrap().anagrams().is_empty());
    }

    #[test]
    fn merge_ignores_unknown_records() {
        let mut words = collection(&["cat"]);
        let stray = LengthClass::new(3, vec![WordRecord::new("dog").unwrap()]);
        assert_eq!(words.merge(stray), 0);
        assert!(words.get("dog").is_none());
    }

    #[test]
    fn subwords_span_all_lengths() {
        let words = collection(&["chapter", "cheap", "patch", "chapters", "ape", "zoo"]);
        let subs: Vec<&str> = words
            .subwords_of("chapter")
            .into_iter()
            .map(WordRecord::original)
            .collect();
        assert_eq!(subs, vec!["cheap", "patch", "ape"]);
        assert!(words.subwords_of("missing").is_empty());
    }

    #[test]
    fn summary_counts_flags() {
        let words = collection(&["level", "Paris", "NASA", "cat"]);
        let summary = words.summary();
        assert_eq!(summary.words, 4);
        assert_eq!(summary.classes, 3);
        assert_eq!(summary.palindromes, 1);
        assert_eq!(summary.proper, 1);
        assert_eq!(summary.acronyms, 1);
        assert_eq!(summary.anagram_groups, 0);
    }

    #[test]
    fn display_matches_word_list_form() {
        let words = collection(&["cat", "dog"]);
        assert_eq!(words.to_string(), "WordList(test (2 words))");
    }

    #[test]
    fn analysis_state_tracked_per_length() {
        let mut words = collection(&["cat", "dog", "horse"]);
        assert!(!words.is_analyzed());
        assert_eq!(words.pending_lengths().collect::<Vec<_>>(), vec![3, 5]);

        let class = words.class(5);
        words.merge(class);
        assert!(words.is_class_analyzed(5));
        assert!(!words.is_class_analyzed(3));
        assert_eq!(words.pending_lengths().collect::<Vec<_>>(), vec![3]);

        let class = words.class(3);
        words.merge(class);
        assert!(words.is_analyzed());
    }

    #[test]
    fn built_collections_are_consistent() {
        assert_eq!(collection(&["cat", "dog", "cat", "horse"]).check_consistency(), Ok(()));
        assert_eq!(collection(&[]).check_consistency(), Ok(()));
    }

    #[test]
    fn out_of_range_slot_is_inconsistent() {
        let mut words = collection(&["cat", "dog"]);
        words.index.insert("dog".to_string(), 7);
        let reason = words.check_consistency().unwrap_err();
        assert!(reason.contains("missing slot 7"), "{reason}");
    }

    #[test]
    fn stale_partition_is_inconsistent() {
        let mut words = collection(&["cat", "dog"]);
        words.partition = LengthPartition::build(&words.records[..1]);
        assert!(words.check_consistency().is_err());
    }

    #[test]
    fn tampered_snapshot_fails_to_load() {
        use crate::error::WordsError;
        use crate::export::load_snapshot;

        let mut words = collection(&["cat", "dog", "horse"]);
        words.index.insert("horse".to_string(), 42);

        let file = tempfile::NamedTempFile::new().unwrap();
        bincode::serialize_into(file.as_file(), &words).unwrap();

        let err = load_snapshot(file.path()).unwrap_err();
        assert!(matches!(err, WordsError::CorruptSnapshot { .. }), "{err}");
    }

    #[test]
    fn empty_collection_has_nothing_pending() {
        let words = collection(&[]);
        assert!(words.is_empty());
        assert!(words.is_analyzed());
    }
}
