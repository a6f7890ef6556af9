//! Length partitioning
//!
//! Words of different lengths never interact, so the collection is split into
//! length classes that can be analysed independently of one another.

use crate::core::WordRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of unordered pairs among `n` words
#[inline]
#[must_use]
pub const fn pairs_in(n: usize) -> u64 {
    let n = n as u64;
    n * n.saturating_sub(1) / 2
}

/// Map from word length to the collection slots holding words of that length
///
/// Slots within a class are in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthPartition {
    classes: BTreeMap<usize, Vec<usize>>,
}

impl LengthPartition {
    /// Partition `records` by length; every slot lands in exactly one class
    #[must_use]
    pub fn build(records: &[WordRecord]) -> Self {
        let mut classes: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for (slot, record) in records.iter().enumerate() {
            classes.entry(record.length()).or_default().push(slot);
        }
        Self { classes }
    }

    /// Lengths present, shortest first
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.classes.keys().copied()
    }

    /// Slots of the words with the given length (empty if none)
    #[must_use]
    pub fn slots(&self, length: usize) -> &[usize] {
        self.classes.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Iterate `(length, slots)` shortest first
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.classes
            .iter()
            .map(|(&length, slots)| (length, slots.as_slice()))
    }

    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Pairs compared when analysing the class of `length`
    #[must_use]
    pub fn pair_count(&self, length: usize) -> u64 {
        pairs_in(self.slots(length).len())
    }

    /// Pairs compared across every class
    #[must_use]
    pub fn total_pairs(&self) -> u64 {
        self.classes.values().map(|slots| pairs_in(slots.len())).sum()
    }
}

/// Owned unit of parallel work: every record of one length
///
/// A class is handed to a worker, updated in isolation, and handed back to
/// the collection to replace the records it was copied from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthClass {
    length: usize,
    records: Vec<WordRecord>,
}

impl LengthClass {
    #[must_use]
    pub const fn new(length: usize, records: Vec<WordRecord>) -> Self {
        Self { length, records }
    }

    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub fn records(&self) -> &[WordRecord] {
        &self.records
    }

    #[inline]
    pub fn records_mut(&mut self) -> &mut [WordRecord] {
        &mut self.records
    }

    #[must_use]
    pub fn into_records(self) -> Vec<WordRecord> {
        self.records
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn pair_count(&self) -> u64 {
        pairs_in(self.records.len())
    }
}
