//! Run configuration.
//!
//! [`RunConfig`] holds everything a scoring run needs besides the data and
//! the lookup tables: which results to read for which year, how to
//! classify benchmarks, and which policy axes to apply.

use crate::classify::FamilyMode;
use crate::error::{Result, ScoringError};
use crate::filter::DivisionFilter;
use crate::scoring::{ScoringPolicy, TimingMode, UnknownPolicy, VerdictSet};
use std::collections::HashSet;
use std::path::PathBuf;

/// One evaluation run to score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YearInput {
    /// Label attached to every job pair of this input.
    pub year: String,
    /// Result table location, handed to the job-pair source.
    pub csv_path: PathBuf,
    /// Time limit of that year's competition, in seconds.
    pub time_limit: f64,
    /// Family weighting for this year only; `None` uses the run setting.
    pub use_families: Option<bool>,
    /// Disagreement filtering for this year only; `None` uses the run
    /// setting.
    pub remove_disagreements: Option<bool>,
}

impl YearInput {
    pub fn new(year: impl Into<String>, csv_path: impl Into<PathBuf>, time_limit: f64) -> Self {
        Self {
            year: year.into(),
            csv_path: csv_path.into(),
            time_limit,
            use_families: None,
            remove_disagreements: None,
        }
    }

    /// Overrides family weighting for this year.
    ///
    /// Competitions used different schemes over time (no weighting in 2015,
    /// weighting from 2016), so a multi-year report sets this per year.
    pub fn with_families(mut self, use_families: bool) -> Self {
        self.use_families = Some(use_families);
        self
    }

    /// Overrides disagreement filtering for this year.
    pub fn with_disagreement_filter(mut self, enabled: bool) -> Self {
        self.remove_disagreements = Some(enabled);
        self
    }
}

/// Configuration of a scoring run.
///
/// # Examples
///
/// ```
/// use u_scoring::classify::FamilyMode;
/// use u_scoring::pipeline::RunConfig;
///
/// let config = RunConfig::from_lists(
///     &["2018", "2019"],
///     &["results-2018.csv", "results-2019.csv"],
///     &[1200.0, 2400.0],
/// )
/// .unwrap()
/// .with_family_mode(FamilyMode::Top)
/// .with_families(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Inputs, scored in this order.
    pub years: Vec<YearInput>,

    /// How benchmark families are derived.
    pub family_mode: FamilyMode,

    /// Divisions to consider.
    pub divisions: DivisionFilter,

    /// Weight scores by benchmark family, unless a year overrides it.
    pub use_families: bool,

    /// Never credit answers on benchmarks of unknown status.
    pub skip_unknowns: bool,

    /// Check CPU time instead of wall-clock time against the limit.
    pub sequential: bool,

    /// Drop unknown-status benchmarks on which sound solvers disagree,
    /// unless a year overrides it.
    pub remove_disagreements: bool,

    /// Score divisions concurrently (requires the `parallel` feature to
    /// have any effect).
    pub parallel: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            years: Vec::new(),
            family_mode: FamilyMode::Bottom,
            divisions: DivisionFilter::All,
            use_families: false,
            skip_unknowns: false,
            sequential: false,
            remove_disagreements: true,
            parallel: false,
        }
    }
}

impl RunConfig {
    /// Zips parallel lists of years, result paths, and time limits.
    ///
    /// Fails if the lists differ in length.
    pub fn from_lists<Y, P>(years: &[Y], csv_paths: &[P], time_limits: &[f64]) -> Result<Self>
    where
        Y: AsRef<str>,
        P: AsRef<std::path::Path>,
    {
        if years.len() != csv_paths.len() {
            return Err(ScoringError::Config(
                "Number of given years and csv files does not match.".into(),
            ));
        }
        if time_limits.len() != csv_paths.len() {
            return Err(ScoringError::Config(
                "Number of given time limits and csv files does not match.".into(),
            ));
        }
        let years = years
            .iter()
            .zip(csv_paths)
            .zip(time_limits)
            .map(|((y, p), &t)| YearInput::new(y.as_ref(), p.as_ref(), t))
            .collect();
        Ok(Self {
            years,
            ..Self::default()
        })
    }

    pub fn with_year(mut self, input: YearInput) -> Self {
        self.years.push(input);
        self
    }

    pub fn with_family_mode(mut self, mode: FamilyMode) -> Self {
        self.family_mode = mode;
        self
    }

    pub fn with_divisions(mut self, divisions: DivisionFilter) -> Self {
        self.divisions = divisions;
        self
    }

    pub fn with_families(mut self, use_families: bool) -> Self {
        self.use_families = use_families;
        self
    }

    pub fn with_skip_unknowns(mut self, skip: bool) -> Self {
        self.skip_unknowns = skip;
        self
    }

    pub fn with_sequential(mut self, sequential: bool) -> Self {
        self.sequential = sequential;
        self
    }

    pub fn with_disagreement_filter(mut self, enabled: bool) -> Self {
        self.remove_disagreements = enabled;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The scoring policy this configuration implies for one input.
    pub fn policy_for(&self, input: &YearInput) -> ScoringPolicy {
        ScoringPolicy::default()
            .with_verdicts(VerdictSet::All)
            .with_time_limit(input.time_limit)
            .with_timing(if self.sequential {
                TimingMode::Sequential
            } else {
                TimingMode::Parallel
            })
            .with_unknowns(if self.skip_unknowns {
                UnknownPolicy::Skip
            } else {
                UnknownPolicy::Credit
            })
            .with_families(input.use_families.unwrap_or(self.use_families))
    }

    /// Whether disagreement benchmarks are removed from `input`.
    pub fn filters_disagreements(&self, input: &YearInput) -> bool {
        input.remove_disagreements.unwrap_or(self.remove_disagreements)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.years.is_empty() {
            return Err(ScoringError::Config("Missing input year(s).".into()));
        }
        let mut seen = HashSet::new();
        for input in &self.years {
            if !seen.insert(input.year.as_str()) {
                return Err(ScoringError::Config(format!(
                    "year {} given more than once",
                    input.year
                )));
            }
            self.policy_for(input).validate()?;
        }
        if let DivisionFilter::Only(set) = &self.divisions {
            if set.is_empty() {
                return Err(ScoringError::Config(
                    "division restriction names no divisions".into(),
                ));
            }
        }
        Ok(())
    }
}
