//! Family extraction policy.

use crate::error::{Result, ScoringError};
use std::fmt;
use std::str::FromStr;

/// Which directory of a benchmark path names its family.
///
/// The rules documents have always specified `Top`, but the scoring
/// scripts of many years implemented `Bottom`; both are supported so old
/// results can be reproduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FamilyMode {
    /// The top-most directory: `a/b/c.smt2` → `a`.
    Top,
    /// The parent directory: `a/b/c.smt2` → `a/b`.
    #[default]
    Bottom,
}

impl FamilyMode {
    /// Extracts the family of a division-stripped benchmark path.
    ///
    /// A path without any `/` is its own family in both modes.
    pub fn family_of<'a>(&self, benchmark: &'a str) -> &'a str {
        match self {
            FamilyMode::Top => benchmark.split_once('/').map_or(benchmark, |(head, _)| head),
            FamilyMode::Bottom => benchmark.rsplit_once('/').map_or(benchmark, |(dir, _)| dir),
        }
    }
}

impl FromStr for FamilyMode {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "top" => Ok(FamilyMode::Top),
            "bot" | "bottom" => Ok(FamilyMode::Bottom),
            other => Err(ScoringError::Config(format!(
                "Family option not supported: {other}"
            ))),
        }
    }
}

impl fmt::Display for FamilyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FamilyMode::Top => f.write_str("top"),
            FamilyMode::Bottom => f.write_str("bot"),
        }
    }
}
