//! Wordplay
//!
//! Finds anagrams and Wordle-style letter similarity across a word list.
//! Words are split into length classes, every class is compared pairwise on
//! the rayon pool, and the results are exported as JSON or a binary snapshot.
//!
//! # Quick Start
//!
//! ```rust
//! use wordplay::analysis::{AnalysisConfig, Scheduler};
//! use wordplay::wordlists::loader::{LoadConfig, collection_from_lines};
//!
//! let mut words = collection_from_lines("inline", ["stare", "tears", "crane"], &LoadConfig::default());
//! Scheduler::new(AnalysisConfig::default()).run(&mut words).unwrap();
//!
//! let stare = words.get("stare").unwrap();
//! assert_eq!(words.anagram_words(stare), vec!["tears"]);
//! println!("{} {}", stare, stare.similarity());
//! ```

// Core domain types
pub mod core;

// Word ingestion and partitioning
pub mod wordlists;

// Parallel pairwise analysis
pub mod analysis;

// JSON and snapshot output
pub mod export;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod error;

pub use error::{AnalysisError, Result, WordsError};
