//! Command implementations

pub mod run;

pub use run::{RunConfig, RunResult, run_analysis};
