//! Display names for solver variants.

use crate::model::SolverSummary;
use std::collections::HashMap;

/// Maps solver variant identifiers to display (base) names.
///
/// Unlisted solvers map to themselves. Several variants may share one
/// display name; the meta-rankings use this to decide whether a division
/// is contested by more than one solver family.
#[derive(Debug, Clone, Default)]
pub struct DisplayNames {
    names: HashMap<String, String>,
}

impl DisplayNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a mapping from `solver` to `display`.
    pub fn with_name(mut self, solver: impl Into<String>, display: impl Into<String>) -> Self {
        self.names.insert(solver.into(), display.into());
        self
    }

    /// Returns the display name of `solver`.
    pub fn display_name<'a>(&'a self, solver: &'a str) -> &'a str {
        self.names.get(solver).map_or(solver, String::as_str)
    }

    /// Returns a copy of `rows` with every solver replaced by its display name.
    pub fn rename_rows(&self, rows: &[SolverSummary]) -> Vec<SolverSummary> {
        rows.iter()
            .map(|row| SolverSummary {
                solver: self.display_name(&row.solver).to_string(),
                ..row.clone()
            })
            .collect()
    }
}

impl<S: Into<String>, D: Into<String>> FromIterator<(S, D)> for DisplayNames {
    fn from_iter<I: IntoIterator<Item = (S, D)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |acc, (s, d)| acc.with_name(s, d))
    }
}
