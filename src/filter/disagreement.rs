//! Removal of benchmarks on which sound solvers disagree.

use crate::model::{JobPair, Verdict};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::debug;

/// Solvers that gave a definite answer contradicting a known status.
pub fn unsound_solvers(pairs: &[JobPair]) -> HashSet<&str> {
    pairs
        .iter()
        .filter(|jp| jp.result.contradicts(jp.expected))
        .map(|jp| jp.solver.as_str())
        .collect()
}

/// Benchmarks of unknown status that received both `sat` and `unsat` from
/// solvers that are sound on the rest of the table.
///
/// Returned in lexicographic order.
pub fn find_disagreements(pairs: &[JobPair]) -> BTreeSet<String> {
    let unsound = unsound_solvers(pairs);

    let mut verdicts: BTreeMap<&str, BTreeSet<Verdict>> = BTreeMap::new();
    for jp in pairs {
        if jp.expected == Verdict::Unknown
            && jp.result.is_definite()
            && !unsound.contains(jp.solver.as_str())
        {
            verdicts
                .entry(jp.benchmark.as_str())
                .or_default()
                .insert(jp.result);
        }
    }

    verdicts
        .into_iter()
        .filter(|(_, seen)| seen.len() > 1)
        .map(|(benchmark, _)| benchmark.to_string())
        .collect()
}

/// Drops every job pair, for every solver, whose benchmark is a
/// disagreement benchmark.
///
/// Idempotent as long as each benchmark has a single expected status: only
/// unknown-status rows are dropped, so the set of unsound solvers does not
/// change.
pub fn remove_disagreements(pairs: &[JobPair]) -> Vec<JobPair> {
    let exclude = find_disagreements(pairs);
    debug!(count = exclude.len(), "found disagreements");
    for (i, benchmark) in exclude.iter().enumerate() {
        debug!(index = i + 1, benchmark = %benchmark, "disagreement");
    }

    pairs
        .iter()
        .filter(|jp| !exclude.contains(&jp.benchmark))
        .cloned()
        .collect()
}
