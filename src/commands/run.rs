//! Full analysis run
//!
//! load → filter → partition → parallel analysis → merge → export

use crate::analysis::{AnalysisConfig, AnalysisReport, CancelToken, Scheduler};
use crate::error::{Result, WordsError};
use crate::export::{ExportFormat, Exporter, JsonExporter, SnapshotExporter};
use crate::wordlists::{LoadConfig, WordCollection, load_from_file};
use std::path::PathBuf;
use tracing::info;

/// Configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub source: PathBuf,
    pub load: LoadConfig,
    pub analysis: AnalysisConfig,
    pub json_output: Option<PathBuf>,
    pub snapshot_output: Option<PathBuf>,
}

impl RunConfig {
    /// Default filter and analysis settings, no outputs
    #[must_use]
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            load: LoadConfig::default(),
            analysis: AnalysisConfig::default(),
            json_output: None,
            snapshot_output: None,
        }
    }

    /// Requested outputs, JSON first
    #[must_use]
    pub fn outputs(&self) -> Vec<(ExportFormat, PathBuf)> {
        let json = self
            .json_output
            .clone()
            .map(|path| (ExportFormat::Json(JsonExporter), path));
        let snapshot = self
            .snapshot_output
            .clone()
            .map(|path| (ExportFormat::Snapshot(SnapshotExporter), path));
        json.into_iter().chain(snapshot).collect()
    }
}

/// Result of a completed run
#[derive(Debug)]
pub struct RunResult {
    pub words: WordCollection,
    pub report: AnalysisReport,
    /// Files written, in the order they were written
    pub written: Vec<(ExportFormat, PathBuf)>,
}

/// Load, analyse and export one word list
///
/// `cancel` is checked between phases and handed to the scheduler; once it
/// trips, no further phase starts and nothing is exported.
///
/// # Errors
///
/// - `WordsError::SourceNotFound` if the source is missing (before any analysis)
/// - `WordsError::WorkerFailure` if a length class fails
/// - `WordsError::Interrupted` if `cancel` trips
/// - I/O and serialization errors from exporting
pub fn run_analysis(config: &RunConfig, cancel: &CancelToken) -> Result<RunResult> {
    let mut words = load_from_file(&config.source, &config.load)?;
    info!("Loaded {words}");
    ensure_running(cancel)?;

    let report = Scheduler::new(config.analysis)
        .with_cancel(cancel.clone())
        .run(&mut words)?;
    ensure_running(cancel)?;

    let mut written = Vec::new();
    for (format, path) in config.outputs() {
        format.export(&words, &path)?;
        info!(format = format.name(), path = %path.display(), "Export written");
        written.push((format, path));
    }

    Ok(RunResult {
        words,
        report,
        written,
    })
}

fn ensure_running(cancel: &CancelToken) -> Result<()> {
    if cancel.is_cancelled() {
        Err(WordsError::Interrupted)
    } else {
        Ok(())
    }
}
