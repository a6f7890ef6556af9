//! All-pairs analysis of a word collection
//!
//! `PairwiseAnalyzer` compares every pair within one length class;
//! `Scheduler` fans the classes out over the rayon pool and merges the results.

mod cancel;
mod pairwise;
mod scheduler;

pub use cancel::CancelToken;
pub use pairwise::{ClassAnalyzer, PairwiseAnalyzer};
pub use scheduler::{AnalysisConfig, AnalysisReport, ClassReport, Scheduler};
