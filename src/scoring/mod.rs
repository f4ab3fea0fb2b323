//! Job-pair scoring.
//!
//! A job pair is *solved* when its verdict is in the policy's
//! [`VerdictSet`], its time (CPU or wall-clock, per [`TimingMode`]) is
//! within the limit, and [`UnknownPolicy`] credits it. Wrong answers are
//! always errors. With family weighting on, both scores are scaled by
//! `alpha_prime_b * num_benchmarks` so magnitudes stay comparable with the
//! unweighted scheme.

mod engine;
mod policy;

pub use engine::ScoringEngine;
pub use policy::{ScoringPolicy, TimingMode, UnknownPolicy, VerdictSet};
