//! Biggest lead ranking (SMT-COMP 2019 rules, section 7.3.1).

use super::types::BiggestLead;
use crate::lookup::DisplayNames;
use crate::model::SolverSummary;
use std::collections::{BTreeMap, HashSet};

/// Ranks divisions by how far the winner is ahead of the runner-up.
///
/// `ranking` must come from [`crate::ranking::rank`]. Non-competitive rows
/// are dropped first, so first and second place are the two best
/// competitive solvers. Divisions whose competitive solvers all share one
/// display name (variants of a single solver) are skipped, as are
/// divisions with fewer than two competitive rows.
///
/// `score = (1 + correct(1st)) / (1 + correct(2nd))`; output is sorted by
/// descending `(score, first, second, division, year)`.
pub fn biggest_lead_ranking(ranking: &[SolverSummary], names: &DisplayNames) -> Vec<BiggestLead> {
    let mut divisions: BTreeMap<(&str, &str), Vec<&SolverSummary>> = BTreeMap::new();
    for row in ranking.iter().filter(|row| row.competitive) {
        divisions
            .entry((row.year.as_str(), row.division.as_str()))
            .or_default()
            .push(row);
    }

    let mut leads: Vec<BiggestLead> = divisions
        .into_iter()
        .filter_map(|((year, division), mut rows)| {
            let bases: HashSet<&str> = rows.iter().map(|r| names.display_name(&r.solver)).collect();
            if bases.len() < 2 || rows.len() < 2 {
                return None;
            }
            rows.sort_by_key(|r| r.rank);
            let (first, second) = (rows[0], rows[1]);
            Some(BiggestLead {
                score: (1.0 + first.correct as f64) / (1.0 + second.correct as f64),
                first: first.solver.clone(),
                second: second.solver.clone(),
                division: division.to_string(),
                year: year.to_string(),
            })
        })
        .collect();

    leads.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| b.first.cmp(&a.first))
            .then_with(|| b.second.cmp(&a.second))
            .then_with(|| b.division.cmp(&a.division))
            .then_with(|| b.year.cmp(&a.year))
    });
    leads
}
