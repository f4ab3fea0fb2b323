//! Data model shared by every stage.
//!
//! Tables are plain `Vec`s of owned rows. Each stage takes the previous
//! stage's table by reference and returns a new one; no stage edits a
//! table it did not produce.
//!
//! - [`RawJobPair`]: a row as loaded from the result source
//! - [`JobPair`]: a row after division/family classification
//! - [`ScoredJobPair`]: a row after scoring under one policy
//! - [`SolverSummary`]: one ranked row per `(year, division, solver)`

mod types;
mod verdict;

pub use types::{JobPair, RawJobPair, ScoredJobPair, SolverSummary};
pub use verdict::{Verdict, UNKNOWN_LABEL};
