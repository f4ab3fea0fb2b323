//! Per-family benchmark weights.
//!
//! For a family with `Fb` distinct benchmarks:
//!
//! ```text
//! alpha_b       = (1 + ln Fb) / Fb
//! alpha_prime_b = alpha_b / sum_f (Fb(f) * alpha_b(f))
//! ```
//!
//! so that `sum_f Fb(f) * alpha_prime_b(f) = 1` over a division.

use crate::error::{Result, ScoringError};
use crate::model::JobPair;
use std::collections::{BTreeMap, BTreeSet};

/// Weight of one benchmark family.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FamilyWeight {
    /// Number of distinct benchmarks in the family (`Fb`).
    pub benchmarks: usize,
    /// Raw weight `alpha_b`.
    pub alpha_b: f64,
    /// Normalized weight `alpha_prime_b`.
    pub alpha_prime_b: f64,
}

/// Normalized family weights of one division.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FamilyWeights {
    families: BTreeMap<String, FamilyWeight>,
}

impl FamilyWeights {
    /// Computes weights from the job pairs of a single division.
    ///
    /// An empty table yields no weights.
    pub fn compute(pairs: &[JobPair]) -> Result<Self> {
        let mut members: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for jp in pairs {
            members
                .entry(jp.family.as_str())
                .or_default()
                .insert(jp.benchmark.as_str());
        }

        let mut raw = Vec::with_capacity(members.len());
        let mut score_sum = 0.0;
        for (family, benchmarks) in &members {
            let fb = benchmarks.len();
            let alpha_b = alpha_b(fb).ok_or_else(|| {
                ScoringError::Domain(format!("benchmark family '{family}' has no benchmarks"))
            })?;
            score_sum += fb as f64 * alpha_b;
            raw.push((*family, fb, alpha_b));
        }

        let families = raw
            .into_iter()
            .map(|(family, benchmarks, alpha_b)| {
                (
                    family.to_string(),
                    FamilyWeight {
                        benchmarks,
                        alpha_b,
                        alpha_prime_b: alpha_b / score_sum,
                    },
                )
            })
            .collect();

        Ok(Self { families })
    }

    /// Returns the normalized weight of `family`, or 1 if it is unknown.
    pub fn alpha_prime_b(&self, family: &str) -> f64 {
        self.families.get(family).map_or(1.0, |w| w.alpha_prime_b)
    }

    pub fn get(&self, family: &str) -> Option<&FamilyWeight> {
        self.families.get(family)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FamilyWeight)> {
        self.families.iter().map(|(f, w)| (f.as_str(), w))
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// `sum_f Fb(f) * alpha_prime_b(f)`; 1 for any non-empty division.
    pub fn normalization_total(&self) -> f64 {
        self.families
            .values()
            .map(|w| w.benchmarks as f64 * w.alpha_prime_b)
            .sum()
    }
}

/// `(1 + ln Fb) / Fb`, or `None` for an empty family.
fn alpha_b(fb: usize) -> Option<f64> {
    if fb == 0 {
        return None;
    }
    let fb = fb as f64;
    Some((1.0 + fb.ln()) / fb)
}
