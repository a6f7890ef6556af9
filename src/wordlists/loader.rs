//! Word list loading
//!
//! Reads a plain text source, one candidate per line, and keeps the lines that
//! pass the qualification filter: ASCII letters only, at least `min_len` long.
//! Lines that fail are dropped without comment.

use super::WordCollection;
use crate::core::{WordRecord, group_thousands};
use crate::error::{Result, WordsError};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Qualification filter parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadConfig {
    /// Shortest word kept
    pub min_len: usize,
    /// Consider only the first N lines of the source (debugging aid)
    pub max_words: Option<usize>,
}

impl LoadConfig {
    pub const DEFAULT_MIN_LEN: usize = 3;

    #[must_use]
    pub const fn new(min_len: usize) -> Self {
        Self {
            min_len,
            max_words: None,
        }
    }

    #[must_use]
    pub const fn with_max_words(mut self, max_words: Option<usize>) -> Self {
        self.max_words = max_words;
        self
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_LEN)
    }
}

/// Turn candidate lines into records, skipping any that do not qualify
///
/// The `max_words` cap applies to lines read, before filtering.
///
/// # Examples
/// ```
/// use wordplay::wordlists::loader::{LoadConfig, records_from_lines};
///
/// let lines = ["cat", "co-op", "at", "Dog", "r2d2"];
/// let records = records_from_lines(lines, &LoadConfig::default());
///
/// let kept: Vec<&str> = records.iter().map(|r| r.original()).collect();
/// assert_eq!(kept, vec!["cat", "Dog"]);
/// ```
pub fn records_from_lines<'a, I>(lines: I, config: &LoadConfig) -> Vec<WordRecord>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .take(config.max_words.unwrap_or(usize::MAX))
        .filter_map(|line| WordRecord::with_min_len(line, config.min_len).ok())
        .collect()
}

/// Build a collection from in-memory lines
pub fn collection_from_lines<'a, I>(
    source: impl Into<String>,
    lines: I,
    config: &LoadConfig,
) -> WordCollection
where
    I: IntoIterator<Item = &'a str>,
{
    WordCollection::from_records(source, records_from_lines(lines, config))
}

/// Load a word list from a file
///
/// Bytes that are not valid UTF-8 are replaced, which makes their lines fail
/// the filter rather than failing the load.
///
/// # Errors
///
/// Returns `WordsError::SourceNotFound` if `path` does not exist or is not a
/// regular file, and `WordsError::Io` if it cannot be read.
///
/// # Examples
/// ```no_run
/// use wordplay::wordlists::loader::{LoadConfig, load_from_file};
///
/// let words = load_from_file("/usr/share/dict/words", &LoadConfig::default()).unwrap();
/// println!("{words}");
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, config: &LoadConfig) -> Result<WordCollection> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(WordsError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    let words = collection_from_lines(path.display().to_string(), content.lines(), config);

    debug!(
        "Read {} words from {}",
        group_thousands(words.len() as u64),
        path.file_name()
            .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
    );

    Ok(words)
}
