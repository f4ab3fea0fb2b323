//! Pre-scoring filters over classified job pairs.
//!
//! - [`remove_disagreements`]: drop unknown-status benchmarks on which
//!   otherwise sound solvers report both `sat` and `unsat`
//! - [`restrict_divisions`]: keep only the configured divisions

mod disagreement;

pub use disagreement::{find_disagreements, remove_disagreements, unsound_solvers};

use crate::model::JobPair;
use std::collections::BTreeSet;

/// Which divisions a run considers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DivisionFilter {
    /// Every division present in the input.
    #[default]
    All,
    /// Only the named divisions.
    Only(BTreeSet<String>),
}

impl DivisionFilter {
    /// Builds a restriction from division names.
    pub fn only<I, S>(divisions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DivisionFilter::Only(divisions.into_iter().map(Into::into).collect())
    }

    pub fn accepts(&self, division: &str) -> bool {
        match self {
            DivisionFilter::All => true,
            DivisionFilter::Only(set) => set.contains(division),
        }
    }
}

/// Returns the job pairs whose division passes `filter`.
pub fn restrict_divisions(pairs: &[JobPair], filter: &DivisionFilter) -> Vec<JobPair> {
    pairs
        .iter()
        .filter(|jp| filter.accepts(&jp.division))
        .cloned()
        .collect()
}
