//! Per-job-pair scoring.
//!
//! [`ScoringEngine`] applies one [`ScoringPolicy`] to the job pairs of a
//! division and produces the scored table.

use super::policy::ScoringPolicy;
use crate::error::{Result, ScoringError};
use crate::family::FamilyWeights;
use crate::lookup::Competitiveness;
use crate::model::{JobPair, ScoredJobPair};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info};

/// Scores job pairs under a [`ScoringPolicy`].
///
/// # Usage
///
/// ```
/// use u_scoring::lookup::Competitiveness;
/// use u_scoring::model::{JobPair, Verdict};
/// use u_scoring::scoring::{ScoringEngine, ScoringPolicy};
///
/// let pairs = vec![JobPair {
///     benchmark: "fam/a.smt2".into(),
///     division: "QF_LIA".into(),
///     family: "fam".into(),
///     solver: "z3".into(),
///     result: Verdict::Sat,
///     expected: Verdict::Sat,
///     cpu_time: 1.0,
///     wallclock_time: 1.0,
///     year: "2019".into(),
/// }];
/// let scored = ScoringEngine::score(
///     "QF_LIA",
///     &pairs,
///     &ScoringPolicy::parallel(),
///     "2019",
///     &Competitiveness::new(),
/// )
/// .unwrap();
/// assert_eq!(scored[0].correct, 1);
/// ```
pub struct ScoringEngine;

impl ScoringEngine {
    /// Scores the job pairs of one division.
    ///
    /// Every row must belong to `division`; the output has one row per
    /// input row, in input order, tagged with `year`.
    pub fn score(
        division: &str,
        pairs: &[JobPair],
        policy: &ScoringPolicy,
        year: &str,
        competitiveness: &Competitiveness,
    ) -> Result<Vec<ScoredJobPair>> {
        policy.validate()?;
        if let Some(stray) = pairs.iter().find(|jp| jp.division != division) {
            return Err(ScoringError::Domain(format!(
                "job pair for {} in division {} passed to scoring of {division}",
                stray.benchmark, stray.division
            )));
        }

        info!(year, division, "computing scores");
        let num_benchmarks = pairs
            .iter()
            .map(|jp| jp.benchmark.as_str())
            .collect::<HashSet<_>>()
            .len();
        debug!(division, num_benchmarks, "division size");

        let weights = if policy.use_families {
            FamilyWeights::compute(pairs)?
        } else {
            FamilyWeights::default()
        };

        Ok(pairs
            .iter()
            .map(|jp| score_pair(jp, policy, &weights, num_benchmarks, year, competitiveness))
            .collect())
    }

    /// Scores a multi-division table, one division at a time.
    ///
    /// Divisions are processed in name order and their outputs
    /// concatenated. With `parallel` (and the `parallel` feature) divisions
    /// are scored concurrently; the output is the same either way.
    pub fn score_divisions(
        pairs: &[JobPair],
        policy: &ScoringPolicy,
        year: &str,
        competitiveness: &Competitiveness,
        parallel: bool,
    ) -> Result<Vec<ScoredJobPair>> {
        let divisions = group_by_division(pairs);

        let per_division: Vec<Result<Vec<ScoredJobPair>>> = if parallel {
            score_parallel(&divisions, policy, year, competitiveness)
        } else {
            divisions
                .iter()
                .map(|(division, rows)| Self::score(division, rows, policy, year, competitiveness))
                .collect()
        };

        let mut scored = Vec::with_capacity(pairs.len());
        for part in per_division {
            scored.extend(part?);
        }
        Ok(scored)
    }
}

fn score_pair(
    jp: &JobPair,
    policy: &ScoringPolicy,
    weights: &FamilyWeights,
    num_benchmarks: usize,
    year: &str,
    competitiveness: &Competitiveness,
) -> ScoredJobPair {
    // Wrong answers are penalized whatever the time limit or verdict set.
    let error = u32::from(jp.result.contradicts(jp.expected));
    let correct = u32::from(policy.is_solved(
        jp.result,
        jp.expected,
        jp.cpu_time,
        jp.wallclock_time,
    ));

    let alpha_prime_b = weights.alpha_prime_b(&jp.family);
    let score_modifier = if policy.use_families {
        alpha_prime_b * num_benchmarks as f64
    } else {
        1.0
    };

    let mut pair = jp.clone();
    pair.year = year.to_string();

    // Time scores are not gated on `correct`: they only break ties.
    ScoredJobPair {
        correct,
        error,
        alpha_prime_b,
        score_correct: f64::from(correct) * score_modifier,
        score_error: f64::from(error) * score_modifier,
        score_cpu_time: jp.cpu_time * alpha_prime_b,
        score_wallclock_time: jp.wallclock_time * alpha_prime_b,
        competitive: competitiveness.is_competitive(year, &jp.solver),
        pair,
    }
}

/// Splits a table by division, keeping row order within each division.
fn group_by_division(pairs: &[JobPair]) -> BTreeMap<String, Vec<JobPair>> {
    let mut divisions: BTreeMap<String, Vec<JobPair>> = BTreeMap::new();
    for jp in pairs {
        divisions
            .entry(jp.division.clone())
            .or_default()
            .push(jp.clone());
    }
    divisions
}

#[cfg(feature = "parallel")]
fn score_parallel(
    divisions: &BTreeMap<String, Vec<JobPair>>,
    policy: &ScoringPolicy,
    year: &str,
    competitiveness: &Competitiveness,
) -> Vec<Result<Vec<ScoredJobPair>>> {
    let work: Vec<(&String, &Vec<JobPair>)> = divisions.iter().collect();
    work.par_iter()
        .map(|(division, rows)| ScoringEngine::score(division, rows, policy, year, competitiveness))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn score_parallel(
    divisions: &BTreeMap<String, Vec<JobPair>>,
    policy: &ScoringPolicy,
    year: &str,
    competitiveness: &Competitiveness,
) -> Vec<Result<Vec<ScoredJobPair>>> {
    divisions
        .iter()
        .map(|(division, rows)| ScoringEngine::score(division, rows, policy, year, competitiveness))
        .collect()
}
