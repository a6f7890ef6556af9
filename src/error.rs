//! Error types for loading, analysing and exporting word lists

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a run
#[derive(Debug, Error)]
pub enum WordsError {
    /// Source path is missing or is not a regular file
    #[error("File not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A length-class task failed; the first failure wins
    #[error("analysis of {length}-letter words failed: {reason}")]
    WorkerFailure { length: usize, reason: String },

    /// Cancellation was requested before every class finished
    #[error("Interrupted")]
    Interrupted,

    /// Export was attempted before every class had been analysed
    #[error("collection has not been fully analysed")]
    NotAnalyzed,

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot failed: {0}")]
    Snapshot(#[from] bincode::Error),

    /// A snapshot decoded but its parts disagree with each other
    #[error("corrupt snapshot: {reason}")]
    CorruptSnapshot { reason: String },
}

/// Failure of a single length-class task
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("word {word:?} has length {found}, expected {expected}")]
    LengthMismatch {
        word: String,
        expected: usize,
        found: usize,
    },

    #[error("task cancelled before it started")]
    Cancelled,

    #[error("task panicked: {0}")]
    Panicked(String),
}

pub type Result<T, E = WordsError> = std::result::Result<T, E>;
