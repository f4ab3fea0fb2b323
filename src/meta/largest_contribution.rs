//! Largest contribution ranking (SMT-COMP 2019 rules, section 7.3.2).

use super::types::LargestContribution;
use crate::error::Result;
use crate::lookup::DisplayNames;
use crate::model::ScoredJobPair;
use crate::vbs::{contribution, vbss};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

/// Ranks divisions by the largest contribution any single solver makes to
/// the virtual best solver.
///
/// Only competitive job pairs are considered. For each `(year, division)`
/// with at least two distinct display names, every solver's contribution
/// is computed and the top one kept (ties go to the greater solver name).
/// The per-division winners are returned sorted by descending
/// `(score, division_size, solver, division, year)`.
pub fn largest_contribution_ranking(
    scored: &[ScoredJobPair],
    names: &DisplayNames,
) -> Result<Vec<LargestContribution>> {
    let mut divisions: BTreeMap<(&str, &str), Vec<ScoredJobPair>> = BTreeMap::new();
    for row in scored.iter().filter(|row| row.competitive) {
        divisions
            .entry((row.year(), row.division()))
            .or_default()
            .push(row.clone());
    }

    let mut tops = Vec::new();
    for ((year, division), rows) in divisions {
        let mut solvers: Vec<&str> = Vec::new();
        for row in &rows {
            if !solvers.contains(&row.solver()) {
                solvers.push(row.solver());
            }
        }

        let bases: HashSet<&str> = solvers.iter().map(|s| names.display_name(s)).collect();
        if bases.len() < 2 {
            continue;
        }

        let vbs_total = vbss(&rows, None)?;
        let mut best: Option<LargestContribution> = None;
        for solver in &solvers {
            let candidate = LargestContribution {
                score: contribution(&rows, solver, vbs_total)?,
                division_size: solvers.len(),
                solver: solver.to_string(),
                division: division.to_string(),
                year: year.to_string(),
            };
            if best
                .as_ref()
                .is_none_or(|b| descending(&candidate, b) == Ordering::Less)
            {
                best = Some(candidate);
            }
        }
        tops.extend(best);
    }

    tops.sort_by(descending);
    Ok(tops)
}

/// Orders entries so that the greater tuple comes first.
fn descending(a: &LargestContribution, b: &LargestContribution) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.division_size.cmp(&a.division_size))
        .then_with(|| b.solver.cmp(&a.solver))
        .then_with(|| b.division.cmp(&a.division))
        .then_with(|| b.year.cmp(&a.year))
}
