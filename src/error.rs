//! Error types for the scoring engine.
//!
//! Every error aborts the run; nothing is retried.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while classifying, scoring, or ranking job pairs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    /// Invalid run or policy configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// An internal invariant does not hold for the given data.
    #[error("domain error: {0}")]
    Domain(String),

    /// A referenced result file does not exist.
    #[error("given input does not exist: {}", .0.display())]
    MissingInput(PathBuf),

    /// A benchmark identifier has no `/` separating division and path.
    #[error("malformed benchmark identifier: {0}")]
    MalformedBenchmark(String),

    /// The job-pair source failed to load a table.
    #[error("failed to load {}: {message}", .path.display())]
    Load {
        /// Path the source was asked to load.
        path: PathBuf,
        /// Source-provided description.
        message: String,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScoringError>;
