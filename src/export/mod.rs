//! Exporting an analysed collection
//!
//! Defines the `Exporter` trait and the two formats: a JSON document for
//! downstream consumers and a binary snapshot that restores the collection
//! without re-running analysis.

mod json;
mod snapshot;

pub use json::JsonExporter;
pub use snapshot::{SnapshotExporter, load_snapshot};

use crate::error::{Result, WordsError};
use crate::wordlists::WordCollection;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// A serialization format for a word collection
pub trait Exporter {
    /// Serialize `words` into `writer`
    ///
    /// # Errors
    /// Returns the format's serialization error or an I/O error.
    fn write_to<W: Write>(&self, words: &WordCollection, writer: W) -> Result<()>;

    /// Write `words` to `path`, replacing it atomically
    ///
    /// # Errors
    /// Returns `WordsError::NotAnalyzed` if any length class is still
    /// pending, otherwise any error from writing.
    fn export(&self, words: &WordCollection, path: &Path) -> Result<()> {
        if !words.is_analyzed() {
            return Err(WordsError::NotAnalyzed);
        }

        debug!("Writing to {}", path.display());
        write_atomically(path, |writer| self.write_to(words, writer))
    }
}

/// Enum wrapper for the export formats
///
/// Allows runtime selection of format while keeping static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json(JsonExporter),
    Snapshot(SnapshotExporter),
}

impl ExportFormat {
    /// Short name for messages
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Json(_) => "json",
            Self::Snapshot(_) => "snapshot",
        }
    }
}

impl Exporter for ExportFormat {
    fn write_to<W: Write>(&self, words: &WordCollection, writer: W) -> Result<()> {
        match self {
            Self::Json(e) => e.write_to(words, writer),
            Self::Snapshot(e) => e.write_to(words, writer),
        }
    }
}

/// Write through a temporary file in the target directory, then rename it
/// over `path`, so readers never see a half-written file
fn write_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<&NamedTempFile>) -> Result<()>,
{
    let parent = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let temp = NamedTempFile::new_in(parent)?;
    {
        let mut writer = BufWriter::new(&temp);
        write(&mut writer)?;
        writer.flush()?;
    }

    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
