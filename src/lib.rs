//! # docsnap
//!
//! Living documentation snapshots: point-in-time captures of markdown documents
//! with computed health metrics, and a diff engine that explains how the
//! documentation changed between two snapshots.

pub mod cli;
pub mod error;
pub mod config;
pub mod hash;
pub mod metrics;
pub mod extract;
pub mod snapshot;
pub mod store;
pub mod change_detection;
pub mod output;
pub mod commands;

pub use error::{DocsnapError, Result};
pub use change_detection::{ChangeDetector, DiffOptions, SnapshotDiff};
pub use store::SnapshotStore;

/// Current format version written into snapshot headers
pub const FORMAT_VERSION: &str = "1.0.0";

/// Minimum word overlap for two lines to count as one modified line
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.70;

/// Reading speed used for the reading time metric
pub const DEFAULT_WORDS_PER_MINUTE: u64 = 200;
