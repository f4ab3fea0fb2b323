//! Solver verdicts and benchmark statuses.

use std::fmt;

/// The label StarExec uses for a missing or inconclusive answer.
pub const UNKNOWN_LABEL: &str = "starexec-unknown";

/// A solver's reported outcome, or a benchmark's expected status.
///
/// Anything that is not a definite `sat`/`unsat` answer (timeouts, memouts,
/// `starexec-unknown`, crashes) collapses into [`Verdict::Unknown`]: none of
/// the scoring rules distinguish between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    #[cfg_attr(feature = "serde", serde(rename = "sat"))]
    Sat,
    #[cfg_attr(feature = "serde", serde(rename = "unsat"))]
    Unsat,
    #[cfg_attr(feature = "serde", serde(rename = "starexec-unknown"))]
    Unknown,
}

impl Verdict {
    /// Parses a raw result column value. Never fails.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "sat" => Verdict::Sat,
            "unsat" => Verdict::Unsat,
            _ => Verdict::Unknown,
        }
    }

    /// Returns `true` for `sat` and `unsat`.
    pub fn is_definite(self) -> bool {
        !matches!(self, Verdict::Unknown)
    }

    /// Returns the canonical column label.
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Sat => "sat",
            Verdict::Unsat => "unsat",
            Verdict::Unknown => UNKNOWN_LABEL,
        }
    }

    /// Two definite verdicts that disagree.
    pub fn contradicts(self, other: Verdict) -> bool {
        self.is_definite() && other.is_definite() && self != other
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
