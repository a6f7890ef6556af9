//! Binary snapshot of a collection
//!
//! A bincode image of the whole `WordCollection`, analysis results included,
//! so tools can reload it without reading the source or re-running analysis.

use super::Exporter;
use crate::error::{Result, WordsError};
use crate::wordlists::WordCollection;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnapshotExporter;

impl Exporter for SnapshotExporter {
    fn write_to<W: Write>(&self, words: &WordCollection, writer: W) -> Result<()> {
        bincode::serialize_into(writer, words)?;
        Ok(())
    }
}

/// Restore a collection written by `SnapshotExporter`
///
/// # Errors
/// Returns `WordsError::Io` if the file cannot be opened,
/// `WordsError::Snapshot` if it is not a valid snapshot, and
/// `WordsError::CorruptSnapshot` if it decodes to an inconsistent collection.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<WordCollection> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let words: WordCollection = bincode::deserialize_from(reader)?;
    words
        .check_consistency()
        .map_err(|reason| WordsError::CorruptSnapshot { reason })?;
    debug!("Loaded snapshot of {} words from {}", words.len(), path.display());
    Ok(words)
}

impl WordCollection {
    /// Restore a collection from a snapshot file
    ///
    /// # Errors
    /// See [`load_snapshot`].
    pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_snapshot(path)
    }
}
