//! Division and family classification of raw job pairs.

use super::config::FamilyMode;
use crate::error::{Result, ScoringError};
use crate::model::{JobPair, RawJobPair};

/// Decides whether a leading path segment is a division name.
///
/// Implemented for any `Fn(&str) -> bool`, so a closure can stand in for a
/// dedicated type.
pub trait DivisionLabel: Send + Sync {
    fn is_division(&self, segment: &str) -> bool;
}

impl<F> DivisionLabel for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_division(&self, segment: &str) -> bool {
        self(segment)
    }
}

/// The StarExec convention: division names are upper-case (`QF_LIA`),
/// space names are not.
///
/// A segment qualifies when it has at least one upper-case letter and no
/// lower-case letters; digits and punctuation are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpperCaseDivision;

impl DivisionLabel for UpperCaseDivision {
    fn is_division(&self, segment: &str) -> bool {
        segment.chars().any(char::is_uppercase) && !segment.chars().any(char::is_lowercase)
    }
}

/// Splits benchmark identifiers into `(benchmark, division, family)`.
///
/// # Examples
///
/// ```
/// use u_scoring::classify::{Classifier, FamilyMode};
///
/// let c = Classifier::new(FamilyMode::Bottom);
/// let (benchmark, division, family) = c.split("QF_LIA/foo/bar/baz.smt2").unwrap();
/// assert_eq!(division, "QF_LIA");
/// assert_eq!(benchmark, "foo/bar/baz.smt2");
/// assert_eq!(family, "foo/bar");
/// ```
pub struct Classifier<L = UpperCaseDivision> {
    mode: FamilyMode,
    label: L,
}

impl Classifier<UpperCaseDivision> {
    /// Creates a classifier using the upper-case division convention.
    pub fn new(mode: FamilyMode) -> Self {
        Self {
            mode,
            label: UpperCaseDivision,
        }
    }
}

impl<L: DivisionLabel> Classifier<L> {
    /// Creates a classifier with a custom division predicate.
    pub fn with_label(mode: FamilyMode, label: L) -> Self {
        Self { mode, label }
    }

    pub fn mode(&self) -> FamilyMode {
        self.mode
    }

    /// Splits one identifier.
    ///
    /// When the first segment is not a division (typically a StarExec space
    /// name) it is dropped and the division is taken from the next segment.
    pub fn split(&self, identifier: &str) -> Result<(String, String, String)> {
        let malformed = || ScoringError::MalformedBenchmark(identifier.to_string());

        let (mut division, mut benchmark) = identifier.split_once('/').ok_or_else(malformed)?;
        if !self.label.is_division(division) {
            (division, benchmark) = benchmark.split_once('/').ok_or_else(malformed)?;
        }
        let family = self.mode.family_of(benchmark);

        Ok((
            benchmark.to_string(),
            division.to_string(),
            family.to_string(),
        ))
    }

    /// Classifies one raw row and tags it with `year`.
    pub fn classify(&self, raw: &RawJobPair, year: &str) -> Result<JobPair> {
        let (benchmark, division, family) = self.split(&raw.benchmark)?;
        Ok(JobPair {
            benchmark,
            division,
            family,
            solver: raw.solver.clone(),
            result: raw.result,
            expected: raw.expected,
            cpu_time: raw.cpu_time,
            wallclock_time: raw.wallclock_time,
            year: year.to_string(),
        })
    }

    /// Classifies a whole table, failing on the first malformed identifier.
    pub fn classify_all(&self, rows: &[RawJobPair], year: &str) -> Result<Vec<JobPair>> {
        rows.iter().map(|raw| self.classify(raw, year)).collect()
    }
}
