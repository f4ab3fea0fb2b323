//! Benchmark classification.
//!
//! Derives `division` and `family` for each raw job pair from its
//! benchmark identifier. Division detection is a pluggable
//! [`DivisionLabel`] predicate; family extraction is a [`FamilyMode`].

mod classifier;
mod config;

pub use classifier::{Classifier, DivisionLabel, UpperCaseDivision};
pub use config::FamilyMode;
