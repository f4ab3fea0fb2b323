//! Virtual best solver score of a division.

use crate::error::{Result, ScoringError};
use crate::model::ScoredJobPair;
use std::collections::{BTreeMap, HashSet};

/// Computes `vbss(D, S \ {excluded})`: the weighted correct score of a
/// hypothetical solver that, on every benchmark, uses the best correct job
/// pair of any solver other than `excluded`.
///
/// Only pairs with `correct > 0` and `error == 0` contribute. Per benchmark
/// the pair with the highest `score_correct` wins; ties go to the lower
/// `wallclock_time`, then to the earlier row. `None` excludes nobody.
///
/// `division` should hold the scored pairs of one `(year, division)`.
pub fn vbss(division: &[ScoredJobPair], excluded: Option<&str>) -> Result<f64> {
    let candidates: Vec<&ScoredJobPair> = division
        .iter()
        .filter(|row| row.correct > 0 && row.error == 0)
        .filter(|row| excluded != Some(row.solver()))
        .collect();

    let mut best: BTreeMap<&str, &ScoredJobPair> = BTreeMap::new();
    for &row in &candidates {
        best.entry(row.benchmark())
            .and_modify(|current| {
                if beats(row, *current) {
                    *current = row;
                }
            })
            .or_insert(row);
    }

    let distinct = candidates
        .iter()
        .map(|row| row.benchmark())
        .collect::<HashSet<_>>()
        .len();
    if best.len() != distinct {
        return Err(ScoringError::Domain(format!(
            "virtual best solver selected {} rows for {} benchmarks",
            best.len(),
            distinct
        )));
    }

    Ok(best.values().map(|row| row.score_correct).sum())
}

/// Returns `true` if `challenger` should replace `incumbent`.
fn beats(challenger: &ScoredJobPair, incumbent: &ScoredJobPair) -> bool {
    if challenger.score_correct != incumbent.score_correct {
        return challenger.score_correct > incumbent.score_correct;
    }
    challenger.pair.wallclock_time < incumbent.pair.wallclock_time
}

/// Contribution of `solver` to the virtual best solver:
/// `1 - vbss(D, S \ {solver}) / vbss(D, S)`.
///
/// A division nobody solved anything in has no virtual best score to
/// lose; every contribution there is 0.
pub fn contribution(division: &[ScoredJobPair], solver: &str, vbs_total: f64) -> Result<f64> {
    if vbs_total <= 0.0 {
        return Ok(0.0);
    }
    let without = vbss(division, Some(solver))?;
    Ok(1.0 - without / vbs_total)
}
