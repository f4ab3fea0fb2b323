//! Scoring policy axes.
//!
//! [`ScoringPolicy`] bundles the independently toggleable axes that decide
//! when a job pair counts as solved and how it is weighted.

use crate::error::{Result, ScoringError};
use crate::model::Verdict;

/// Which verdicts count toward "solved".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerdictSet {
    /// `sat` and `unsat`.
    #[default]
    All,
    /// Only `sat` answers (sat-only ranking).
    SatOnly,
    /// Only `unsat` answers (unsat-only ranking).
    UnsatOnly,
}

impl VerdictSet {
    pub fn contains(self, verdict: Verdict) -> bool {
        match self {
            VerdictSet::All => verdict.is_definite(),
            VerdictSet::SatOnly => verdict == Verdict::Sat,
            VerdictSet::UnsatOnly => verdict == Verdict::Unsat,
        }
    }
}

/// Which time column is checked against the time limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimingMode {
    /// CPU time (sequential performance).
    Sequential,
    /// Wall-clock time (parallel performance).
    #[default]
    Parallel,
}

/// How answers on benchmarks of unknown status are credited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnknownPolicy {
    /// A definite answer on an unknown-status benchmark is credited
    /// (benefit of the doubt). Used from 2017 on.
    #[default]
    Credit,
    /// Only answers matching a known status are credited; unknown-status
    /// benchmarks can never be solved. Used before 2017.
    Skip,
}

impl UnknownPolicy {
    /// Whether `result` is credited against `expected`.
    ///
    /// Assumes `result` already passed the verdict-set and time checks.
    pub fn credits(self, result: Verdict, expected: Verdict) -> bool {
        match self {
            UnknownPolicy::Credit => expected == Verdict::Unknown || result == expected,
            UnknownPolicy::Skip => result == expected,
        }
    }
}

/// A complete scoring policy.
///
/// # Examples
///
/// ```
/// use u_scoring::scoring::{ScoringPolicy, TimingMode, UnknownPolicy, VerdictSet};
///
/// let policy = ScoringPolicy::default()
///     .with_time_limit(2400.0)
///     .with_verdicts(VerdictSet::UnsatOnly)
///     .with_timing(TimingMode::Sequential)
///     .with_unknowns(UnknownPolicy::Skip)
///     .with_families(true);
/// assert!(policy.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoringPolicy {
    pub verdicts: VerdictSet,

    /// Seconds. A pair only counts as solved if its time is at most this.
    pub time_limit: f64,

    pub timing: TimingMode,

    pub unknowns: UnknownPolicy,

    /// Weight benchmarks by family (2016-2018 scheme).
    pub use_families: bool,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            verdicts: VerdictSet::All,
            time_limit: f64::INFINITY,
            timing: TimingMode::Parallel,
            unknowns: UnknownPolicy::Credit,
            use_families: false,
        }
    }
}

impl ScoringPolicy {
    pub fn with_verdicts(mut self, verdicts: VerdictSet) -> Self {
        self.verdicts = verdicts;
        self
    }

    pub fn with_time_limit(mut self, seconds: f64) -> Self {
        self.time_limit = seconds;
        self
    }

    pub fn with_timing(mut self, timing: TimingMode) -> Self {
        self.timing = timing;
        self
    }

    pub fn with_unknowns(mut self, unknowns: UnknownPolicy) -> Self {
        self.unknowns = unknowns;
        self
    }

    pub fn with_families(mut self, use_families: bool) -> Self {
        self.use_families = use_families;
        self
    }

    /// Caps the time limit at `seconds`, keeping the lower of the two.
    pub fn capped_at(mut self, seconds: f64) -> Self {
        self.time_limit = self.time_limit.min(seconds);
        self
    }

    /// Preset: all verdicts, 2400 s wall-clock limit.
    pub fn parallel() -> Self {
        Self::default().with_time_limit(2400.0)
    }

    /// Preset: only `sat` answers, 2400 s wall-clock limit.
    pub fn sat_only() -> Self {
        Self::parallel().with_verdicts(VerdictSet::SatOnly)
    }

    /// Preset: only `unsat` answers, 2400 s wall-clock limit.
    pub fn unsat_only() -> Self {
        Self::parallel().with_verdicts(VerdictSet::UnsatOnly)
    }

    /// Preset: all verdicts, 24 s wall-clock limit.
    pub fn twenty_four_seconds() -> Self {
        Self::default().with_time_limit(24.0)
    }

    /// Picks the time column this policy checks.
    pub fn time_of(&self, cpu_time: f64, wallclock_time: f64) -> f64 {
        match self.timing {
            TimingMode::Sequential => cpu_time,
            TimingMode::Parallel => wallclock_time,
        }
    }

    /// The "solved" predicate: verdict in the set, within the time limit,
    /// and credited under the unknown-status policy.
    pub fn is_solved(
        &self,
        result: Verdict,
        expected: Verdict,
        cpu_time: f64,
        wallclock_time: f64,
    ) -> bool {
        self.verdicts.contains(result)
            && self.time_of(cpu_time, wallclock_time) <= self.time_limit
            && self.unknowns.credits(result, expected)
    }

    /// Validates the policy.
    pub fn validate(&self) -> Result<()> {
        if self.time_limit.is_nan() || self.time_limit < 0.0 {
            return Err(ScoringError::Config(format!(
                "time limit must be a non-negative number, got {}",
                self.time_limit
            )));
        }
        Ok(())
    }
}
