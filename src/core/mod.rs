//! Core domain types for word analysis
//!
//! This module contains the per-word data model and the pairwise comparison.
//! Nothing here knows about files, threads or output formats.

mod letters;
mod similarity;
mod word;

pub use letters::LetterCounts;
pub use similarity::{PairScore, Similarity, group_thousands};
pub use word::{WordError, WordRecord};
