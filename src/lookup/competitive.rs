//! Competitiveness of solvers per year.

use std::collections::{HashMap, HashSet};

/// Set of `(year, solver)` pairs that are *not* competitive.
///
/// Solvers not listed for a year are competitive, as are all solvers of a
/// year that has no entries at all.
///
/// # Examples
///
/// ```
/// use u_scoring::lookup::Competitiveness;
///
/// let comp: Competitiveness = [("2019", "z3-4.8.4")].into_iter().collect();
/// assert!(!comp.is_competitive("2019", "z3-4.8.4"));
/// assert!(comp.is_competitive("2018", "z3-4.8.4"));
/// assert!(comp.is_competitive("2019", "CVC4"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Competitiveness {
    excluded: HashMap<String, HashSet<String>>,
}

impl Competitiveness {
    /// Creates an empty list: every solver is competitive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `solver` as non-competitive in `year`.
    pub fn with_non_competitive(
        mut self,
        year: impl Into<String>,
        solver: impl Into<String>,
    ) -> Self {
        self.excluded
            .entry(year.into())
            .or_default()
            .insert(solver.into());
        self
    }

    /// Returns `true` unless `solver` is listed as non-competitive in `year`.
    pub fn is_competitive(&self, year: &str, solver: &str) -> bool {
        self.excluded
            .get(year)
            .is_none_or(|solvers| !solvers.contains(solver))
    }

    /// Number of listed `(year, solver)` pairs.
    pub fn len(&self) -> usize {
        self.excluded.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<Y: Into<String>, S: Into<String>> FromIterator<(Y, S)> for Competitiveness {
    fn from_iter<I: IntoIterator<Item = (Y, S)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |acc, (y, s)| acc.with_non_competitive(y, s))
    }
}
