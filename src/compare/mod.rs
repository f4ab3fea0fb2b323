//! Division winners and comparison of rankings.
//!
//! Used to show how an alternative scoring policy (sat-only, unsat-only,
//! a shorter time limit) changes who wins each division.

use crate::lookup::{Competitiveness, DisplayNames};
use crate::model::SolverSummary;
use std::collections::HashSet;

/// Rank-0 rows of a ranking, one per `(year, division)`.
pub fn winners(ranking: &[SolverSummary]) -> Vec<SolverSummary> {
    ranking.iter().filter(|row| row.rank == 0).cloned().collect()
}

/// Winners of `other` that differ from the winners of `normal`.
///
/// Solvers are compared by display name, so a variant swap is not a
/// change. Returned rows carry display names.
pub fn changed_winners(
    normal: &[SolverSummary],
    other: &[SolverSummary],
    names: &DisplayNames,
) -> Vec<SolverSummary> {
    let normal = names.rename_rows(&winners(normal));
    let baseline: HashSet<(&str, &str, &str)> = normal
        .iter()
        .map(|row| (row.year.as_str(), row.division.as_str(), row.solver.as_str()))
        .collect();

    names
        .rename_rows(&winners(other))
        .into_iter()
        .filter(|row| {
            !baseline.contains(&(row.year.as_str(), row.division.as_str(), row.solver.as_str()))
        })
        .collect()
}

/// Display label of a winner; non-competitive solvers are bracketed.
pub fn winner_label(
    row: &SolverSummary,
    competitiveness: &Competitiveness,
    names: &DisplayNames,
) -> String {
    let name = names.display_name(&row.solver);
    if competitiveness.is_competitive(&row.year, &row.solver) {
        name.to_string()
    } else {
        format!("[{name}]")
    }
}

/// Space-separated, sorted labels of the winners of one `(year, division)`.
pub fn winners_label(
    ranking: &[SolverSummary],
    year: &str,
    division: &str,
    competitiveness: &Competitiveness,
    names: &DisplayNames,
) -> String {
    let mut labels: Vec<String> = ranking
        .iter()
        .filter(|row| row.rank == 0 && row.year == year && row.division == division)
        .map(|row| winner_label(row, competitiveness, names))
        .collect();
    labels.sort();
    labels.join(" ")
}
