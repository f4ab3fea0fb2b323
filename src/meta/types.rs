//! Rows of the meta-rankings.

/// One division's entry in the biggest lead ranking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BiggestLead {
    /// `(1 + correct(1st)) / (1 + correct(2nd))`.
    pub score: f64,
    pub first: String,
    pub second: String,
    pub division: String,
    pub year: String,
}

/// One division's top contributor to the virtual best solver.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LargestContribution {
    /// `1 - vbss(D, S \ {solver}) / vbss(D, S)`.
    pub score: f64,
    /// Number of competitive solvers in the division.
    pub division_size: usize,
    pub solver: String,
    pub division: String,
    pub year: String,
}
