//! Scoring and ranking of solver evaluation results.
//!
//! Given job-pair results (one solver run on one benchmark) from one or
//! more yearly evaluations, this crate decides which answers count, scores
//! them under a configurable policy, and ranks solvers per division:
//!
//! - **Classification** ([`classify`]): splits benchmark identifiers into
//!   division, family and stripped benchmark.
//! - **Filtering** ([`filter`]): division restriction and removal of
//!   unknown-status benchmarks on which sound solvers disagree.
//! - **Family weighting** ([`family`]): normalized per-family weights that
//!   keep large families from dominating a division.
//! - **Scoring** ([`scoring`]): per job-pair correct/error/time scores
//!   under a [`scoring::ScoringPolicy`].
//! - **Ranking** ([`ranking`]): lexicographic ordering of solver
//!   summaries through a composable rule engine.
//! - **Virtual best solver** ([`vbs`]) and **meta-rankings** ([`meta`]):
//!   largest contribution and biggest lead across divisions.
//! - **Comparison** ([`compare`]): division winners under alternative
//!   policies.
//! - **Pipeline** ([`pipeline`]): batch runs over several years.
//!
//! # Architecture
//!
//! Every stage is a function over owned row tables. Reading result files
//! and rendering output are left to the caller through
//! [`pipeline::JobPairSource`] and the returned tables.

pub mod classify;
pub mod compare;
pub mod error;
pub mod family;
pub mod filter;
pub mod lookup;
pub mod meta;
pub mod model;
pub mod pipeline;
pub mod ranking;
pub mod scoring;
pub mod vbs;

pub use error::{Result, ScoringError};
