//! Word lists: loading, the canonical collection, and length partitioning

mod collection;
pub mod loader;
mod partition;

pub use collection::{Summary, WordCollection};
pub use loader::{LoadConfig, load_from_file};
pub use partition::{LengthClass, LengthPartition, pairs_in};
