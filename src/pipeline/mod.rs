//! Batch scoring runs over one or more years of results.
//!
//! # Key Types
//!
//! - [`RunConfig`]: inputs per year and the policy switches of a run
//! - [`JobPairSource`]: how raw tables are loaded (format parsing lives
//!   with the caller)
//! - [`Pipeline`]: drives classification, filtering, scoring, ranking and
//!   the meta-rankings
//! - [`RunResult`]: everything a presentation layer needs to render

mod config;
mod runner;
mod source;

pub use config::{RunConfig, YearInput};
pub use runner::{Pipeline, RunResult, Variant, VariantResult, YearResult};
pub use source::{JobPairSource, MemorySource};
