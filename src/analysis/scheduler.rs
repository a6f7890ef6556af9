//! Parallel scheduling of length classes
//!
//! One task per pending length class runs on the rayon pool. Each task owns a
//! copy of its class and returns the updated copy; nothing is shared between
//! tasks. After every task has joined, the updated classes are merged back
//! into the collection on the calling thread.

use super::{CancelToken, ClassAnalyzer, PairwiseAnalyzer};
use crate::core::group_thousands;
use crate::error::{AnalysisError, Result, WordsError};
use crate::wordlists::{LengthClass, WordCollection};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::OnceLock;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// Scheduler settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Debug trace interval, in pairs, within a class
    pub pagination: u64,
    /// Draw a terminal progress bar while classes run
    pub show_progress: bool,
}

impl AnalysisConfig {
    #[must_use]
    pub const fn new(pagination: u64) -> Self {
        Self {
            pagination,
            show_progress: false,
        }
    }

    #[must_use]
    pub const fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::new(PairwiseAnalyzer::DEFAULT_PAGINATION)
    }
}

/// Outcome of one analysed length class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassReport {
    pub length: usize,
    pub words: usize,
    pub pairs: u64,
    pub elapsed: Duration,
}

/// Outcome of a scheduler run, classes shortest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisReport {
    pub classes: Vec<ClassReport>,
    pub elapsed: Duration,
}

impl AnalysisReport {
    #[must_use]
    pub fn total_pairs(&self) -> u64 {
        self.classes.iter().map(|c| c.pairs).sum()
    }

    #[must_use]
    pub fn total_words(&self) -> usize {
        self.classes.iter().map(|c| c.words).sum()
    }
}

/// Runs one `ClassAnalyzer` task per length class and merges the results
pub struct Scheduler<A: ClassAnalyzer = PairwiseAnalyzer> {
    analyzer: A,
    config: AnalysisConfig,
    cancel: CancelToken,
}

impl Scheduler {
    /// Scheduler running the standard pairwise analysis
    #[must_use]
    pub fn new(config: AnalysisConfig) -> Self {
        Self::with_analyzer(PairwiseAnalyzer::new(config.pagination), config)
    }
}

impl<A: ClassAnalyzer> Scheduler<A> {
    #[must_use]
    pub fn with_analyzer(analyzer: A, config: AnalysisConfig) -> Self {
        Self {
            analyzer,
            config,
            cancel: CancelToken::new(),
        }
    }

    /// Use an externally owned cancellation token
    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    #[must_use]
    pub const fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Analyse every pending length class of `words` and merge the results
    ///
    /// Classes already analysed (e.g. by an earlier, interrupted run) are
    /// skipped, so their totals are never counted twice.
    ///
    /// # Errors
    ///
    /// - `WordsError::WorkerFailure` for the first task to fail; nothing from
    ///   this run is merged.
    /// - `WordsError::Interrupted` if cancellation stopped some classes before
    ///   they finished. Classes that did finish are merged before returning.
    ///
    /// # Examples
    /// ```
    /// use wordplay::analysis::{AnalysisConfig, Scheduler};
    /// use wordplay::wordlists::loader::{LoadConfig, collection_from_lines};
    ///
    /// let mut words = collection_from_lines("inline", ["cat", "act", "dog"], &LoadConfig::default());
    /// Scheduler::new(AnalysisConfig::default()).run(&mut words).unwrap();
    ///
    /// assert!(words.is_analyzed());
    /// assert_eq!(words.anagram_words(words.get("cat").unwrap()), vec!["act"]);
    /// ```
    pub fn run(&self, words: &mut WordCollection) -> Result<AnalysisReport> {
        let start = Instant::now();
        let classes: Vec<LengthClass> = words
            .pending_lengths()
            .map(|length| words.class(length))
            .collect();

        let total_pairs = classes.iter().map(LengthClass::pair_count).sum();
        let progress = self.progress_bar(total_pairs);
        // Trips on the first failure, and on external cancellation through its parent
        let abort = self.cancel.child();
        let first_failure: OnceLock<(usize, AnalysisError)> = OnceLock::new();

        let outcomes: Vec<Result<(LengthClass, Duration), AnalysisError>> = classes
            .into_par_iter()
            .map(|class| self.run_task(class, &progress, &abort, &first_failure))
            .collect();

        progress.finish_and_clear();

        if let Some((length, err)) = first_failure.into_inner() {
            error!(length, %err, "Length class failed, aborting run");
            return Err(WordsError::WorkerFailure {
                length,
                reason: err.to_string(),
            });
        }

        let mut report = AnalysisReport::default();
        let mut interrupted = false;

        for outcome in outcomes {
            match outcome {
                Ok((class, elapsed)) => {
                    report.classes.push(ClassReport {
                        length: class.length(),
                        words: class.word_count(),
                        pairs: class.pair_count(),
                        elapsed,
                    });
                    words.merge(class);
                }
                Err(_) => interrupted = true,
            }
        }

        report.elapsed = start.elapsed();

        if interrupted {
            warn!(
                merged = report.classes.len(),
                pending = words.pending_lengths().count(),
                "Analysis interrupted"
            );
            return Err(WordsError::Interrupted);
        }

        info!(
            classes = report.classes.len(),
            pairs = report.total_pairs(),
            elapsed_ms = report.elapsed.as_millis(),
            "Analysis complete"
        );

        Ok(report)
    }

    fn run_task(
        &self,
        class: LengthClass,
        progress: &ProgressBar,
        abort: &CancelToken,
        first_failure: &OnceLock<(usize, AnalysisError)>,
    ) -> Result<(LengthClass, Duration), AnalysisError> {
        if abort.is_cancelled() {
            return Err(AnalysisError::Cancelled);
        }

        let length = class.length();
        info!(
            "Processing {} words of {length} characters",
            group_thousands(class.word_count() as u64)
        );

        let start = Instant::now();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.analyzer.analyze(class, progress, abort)
        }))
        .unwrap_or_else(|payload| Err(AnalysisError::Panicked(panic_message(&*payload))));

        match outcome {
            Ok(class) => Ok((class, start.elapsed())),
            Err(AnalysisError::Cancelled) => {
                info!(length, "Stopped {length}-letter words before finishing");
                Err(AnalysisError::Cancelled)
            }
            Err(err) => {
                abort.cancel();
                // Only the earliest failure is kept
                let _ = first_failure.set((length, err.clone()));
                Err(err)
            }
        }
    }

    fn progress_bar(&self, total_pairs: u64) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let style = ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {human_pos}/{human_len} pairs ({percent}%) {eta}",
        )
        .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓▒░"));

        let bar = ProgressBar::new(total_pairs);
        bar.set_style(style);
        bar
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|msg| (*msg).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
