//! Table rows passed between the pipeline stages.

use super::verdict::Verdict;

/// One row of raw input as delivered by a job-pair source.
///
/// `benchmark` may still carry a leading division segment
/// (`QF_LIA/family/file.smt2`); the classifier strips it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawJobPair {
    pub benchmark: String,
    pub solver: String,
    pub result: Verdict,
    pub expected: Verdict,
    pub cpu_time: f64,
    pub wallclock_time: f64,
}

impl RawJobPair {
    /// Creates a raw row from column values.
    pub fn new(
        benchmark: impl Into<String>,
        solver: impl Into<String>,
        result: Verdict,
        expected: Verdict,
        cpu_time: f64,
        wallclock_time: f64,
    ) -> Self {
        Self {
            benchmark: benchmark.into(),
            solver: solver.into(),
            result,
            expected,
            cpu_time,
            wallclock_time,
        }
    }
}

/// A classified job pair: one solver run on one benchmark in one year.
///
/// `(year, division, solver, benchmark)` is not unique; repeated attempts
/// are kept as separate rows.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JobPair {
    /// Benchmark path with the division segment removed.
    pub benchmark: String,
    pub division: String,
    pub family: String,
    pub solver: String,
    pub result: Verdict,
    pub expected: Verdict,
    /// Seconds.
    pub cpu_time: f64,
    /// Seconds.
    pub wallclock_time: f64,
    /// Label of the evaluation run this pair was ingested from.
    pub year: String,
}

/// A job pair with its score under one scoring policy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredJobPair {
    pub pair: JobPair,
    /// 1 if the pair counts as solved under the policy.
    pub correct: u32,
    /// 1 if the solver gave a definite wrong answer.
    pub error: u32,
    /// Normalized family weight; 1 when family weighting is off.
    pub alpha_prime_b: f64,
    pub score_correct: f64,
    pub score_error: f64,
    pub score_cpu_time: f64,
    pub score_wallclock_time: f64,
    pub competitive: bool,
}

impl ScoredJobPair {
    pub fn benchmark(&self) -> &str {
        &self.pair.benchmark
    }

    pub fn solver(&self) -> &str {
        &self.pair.solver
    }

    pub fn division(&self) -> &str {
        &self.pair.division
    }

    pub fn year(&self) -> &str {
        &self.pair.year
    }
}

/// Aggregated result of one solver in one division of one year.
///
/// Rows are produced once per scoring run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverSummary {
    pub year: String,
    pub division: String,
    pub solver: String,
    pub correct: u64,
    pub error: u64,
    pub score_correct: f64,
    pub score_error: f64,
    pub score_cpu_time: f64,
    pub score_wallclock_time: f64,
    /// Percentage of the division's distinct benchmarks solved.
    pub psolved: f64,
    pub competitive: bool,
    /// 0-based position within `(year, division)`.
    pub rank: usize,
}
