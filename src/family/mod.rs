//! Benchmark family weighting.
//!
//! Counteracts benchmark-count skew inside a division: a family of many
//! near-identical benchmarks should not dominate the score. Weights follow
//! the SMT-COMP 2016-2018 rules.

mod weights;

pub use weights::{FamilyWeight, FamilyWeights};
