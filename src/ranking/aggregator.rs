//! Aggregation of scored job pairs into ranked solver summaries.

use super::rules::{PriorityRule, RuleEngine};
use crate::lookup::Competitiveness;
use crate::model::{ScoredJobPair, SolverSummary};
use std::collections::{BTreeMap, HashSet};

/// Fewer weighted wrong answers first.
pub struct FewestErrors;

impl PriorityRule<SolverSummary> for FewestErrors {
    fn name(&self) -> &str {
        "score_error"
    }
    fn key(&self, s: &SolverSummary) -> f64 {
        s.score_error
    }
}

/// More weighted correct answers first.
pub struct MostCorrect;

impl PriorityRule<SolverSummary> for MostCorrect {
    fn name(&self) -> &str {
        "score_correct"
    }
    fn key(&self, s: &SolverSummary) -> f64 {
        -s.score_correct
    }
}

/// Less weighted wall-clock time first.
pub struct FastestWallclock;

impl PriorityRule<SolverSummary> for FastestWallclock {
    fn name(&self) -> &str {
        "score_wallclock_time"
    }
    fn key(&self, s: &SolverSummary) -> f64 {
        s.score_wallclock_time
    }
}

/// Less weighted CPU time first.
pub struct FastestCpu;

impl PriorityRule<SolverSummary> for FastestCpu {
    fn name(&self) -> &str {
        "score_cpu_time"
    }
    fn key(&self, s: &SolverSummary) -> f64 {
        s.score_cpu_time
    }
}

/// The competition ranking: errors, then correct, then wall-clock, then
/// CPU time.
pub fn solver_ranking() -> RuleEngine<SolverSummary> {
    RuleEngine::new()
        .with_rule(FewestErrors)
        .with_rule(MostCorrect)
        .with_rule(FastestWallclock)
        .with_rule(FastestCpu)
}

/// Sums the scored rows of each `(year, division, solver)`.
///
/// Output is ordered by `(year, division, solver)`; `rank` is left at 0.
pub fn aggregate(
    scored: &[ScoredJobPair],
    competitiveness: &Competitiveness,
) -> Vec<SolverSummary> {
    let mut benchmarks: BTreeMap<(&str, &str), HashSet<&str>> = BTreeMap::new();
    let mut groups: BTreeMap<(&str, &str, &str), SolverSummary> = BTreeMap::new();

    for row in scored {
        benchmarks
            .entry((row.year(), row.division()))
            .or_default()
            .insert(row.benchmark());

        let summary = groups
            .entry((row.year(), row.division(), row.solver()))
            .or_insert_with(|| SolverSummary {
                year: row.year().to_string(),
                division: row.division().to_string(),
                solver: row.solver().to_string(),
                correct: 0,
                error: 0,
                score_correct: 0.0,
                score_error: 0.0,
                score_cpu_time: 0.0,
                score_wallclock_time: 0.0,
                psolved: 0.0,
                competitive: competitiveness.is_competitive(row.year(), row.solver()),
                rank: 0,
            });
        summary.correct += u64::from(row.correct);
        summary.error += u64::from(row.error);
        summary.score_correct += row.score_correct;
        summary.score_error += row.score_error;
        summary.score_cpu_time += row.score_cpu_time;
        summary.score_wallclock_time += row.score_wallclock_time;
    }

    groups
        .into_iter()
        .map(|((year, division, _), mut summary)| {
            let total = benchmarks.get(&(year, division)).map_or(0, HashSet::len);
            if total > 0 {
                summary.psolved = 100.0 * summary.correct as f64 / total as f64;
            }
            summary
        })
        .collect()
}

/// Orders summaries within each `(year, division)` and assigns `rank`.
///
/// Groups are emitted in `(year, division)` order. Rows tied on all four
/// keys keep their input order.
pub fn rank(summaries: &[SolverSummary]) -> Vec<SolverSummary> {
    let engine = solver_ranking();

    let mut groups: BTreeMap<(&str, &str), Vec<&SolverSummary>> = BTreeMap::new();
    for s in summaries {
        groups
            .entry((s.year.as_str(), s.division.as_str()))
            .or_default()
            .push(s);
    }

    let mut ranked = Vec::with_capacity(summaries.len());
    for rows in groups.into_values() {
        let owned: Vec<SolverSummary> = rows.into_iter().cloned().collect();
        for (position, index) in engine.sort_indices(&owned).into_iter().enumerate() {
            ranked.push(SolverSummary {
                rank: position,
                ..owned[index].clone()
            });
        }
    }
    ranked
}

/// Aggregates scored job pairs and ranks the resulting summaries.
pub fn group_and_rank(
    scored: &[ScoredJobPair],
    competitiveness: &Competitiveness,
) -> Vec<SolverSummary> {
    rank(&aggregate(scored, competitiveness))
}
