//! Pairwise analysis of one length class
//!
//! Every unordered pair of words in the class is compared exactly once and the
//! result is folded into both words: their anagram lists when the letter
//! multisets match, and their wordle totals always.

use super::CancelToken;
use crate::core::{PairScore, group_thousands};
use crate::error::AnalysisError;
use crate::wordlists::LengthClass;
use indicatif::ProgressBar;
use tracing::debug;

/// Per-class analysis run by a scheduler worker
///
/// Implementations take ownership of the class and hand back its updated
/// form; they must not depend on any other class. Long-running work should
/// poll `cancel` and give up with `AnalysisError::Cancelled` once it trips.
pub trait ClassAnalyzer: Sync {
    /// Analyse `class`, advancing `progress` by the number of pairs compared
    ///
    /// # Errors
    /// Returns an `AnalysisError` if the class cannot be analysed or
    /// `cancel` trips first.
    fn analyze(
        &self,
        class: LengthClass,
        progress: &ProgressBar,
        cancel: &CancelToken,
    ) -> Result<LengthClass, AnalysisError>;
}

/// All-pairs anagram and wordle comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairwiseAnalyzer {
    /// Emit a debug trace every this many pairs
    pagination: u64,
}

impl PairwiseAnalyzer {
    pub const DEFAULT_PAGINATION: u64 = 1_000_000;

    /// A zero `pagination` is treated as 1
    #[must_use]
    pub const fn new(pagination: u64) -> Self {
        Self {
            pagination: if pagination == 0 { 1 } else { pagination },
        }
    }

    #[must_use]
    pub const fn pagination(&self) -> u64 {
        self.pagination
    }
}

impl Default for PairwiseAnalyzer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGINATION)
    }
}

impl ClassAnalyzer for PairwiseAnalyzer {
    /// Pairs are visited as (i, j) with i < j in input order, so anagram
    /// partners are appended in input order too. `cancel` is polled once
    /// per row.
    fn analyze(
        &self,
        mut class: LengthClass,
        progress: &ProgressBar,
        cancel: &CancelToken,
    ) -> Result<LengthClass, AnalysisError> {
        let length = class.length();

        if let Some(stray) = class.records().iter().find(|r| r.length() != length) {
            return Err(AnalysisError::LengthMismatch {
                word: stray.original().to_string(),
                expected: length,
                found: stray.length(),
            });
        }

        let records = class.records_mut();
        let count = records.len();
        let mut visited: u64 = 0;

        for i in 0..count {
            if cancel.is_cancelled() {
                debug!("[{length}] cancelled after {} pairs", group_thousands(visited));
                return Err(AnalysisError::Cancelled);
            }

            let (head, tail) = records.split_at_mut(i + 1);
            let a = &mut head[i];

            for b in tail.iter_mut() {
                visited += 1;
                if visited % self.pagination == 0 {
                    debug!(
                        "[{length}] {} {} : {}",
                        group_thousands(visited),
                        a.normalized(),
                        b.normalized()
                    );
                }

                let score = PairScore::calculate(a, b).ok_or_else(|| {
                    AnalysisError::LengthMismatch {
                        word: b.original().to_string(),
                        expected: a.length(),
                        found: b.length(),
                    }
                })?;

                a.absorb(b.original(), score);
                b.absorb(a.original(), score);
            }

            progress.inc((count - i - 1) as u64);
        }

        Ok(class)
    }
}
