//! Saved-run history for the impact calculator.
//!
//! Runs are kept as one JSON document in a pluggable key-value store owned by
//! the caller. The calculator itself never touches storage.

pub mod compare;
pub mod dir_store;
pub mod error;
pub mod history;
pub mod stats;
pub mod store;

pub use dir_store::DirStore;
pub use error::StoreError;
pub use compare::{ComparedValue, ComparisonSummary, MetricComparison, RunComparison};
pub use history::{
    HistoryDocument, RunDetails, RunHistory, RunQuery, RunSummary, RunUpdate, SavedRun,
};
pub use stats::{HistoryStatistics, LocationCount};
pub use store::{KeyValueStore, MemoryStore};

#[cfg(test)]
mod tests;
