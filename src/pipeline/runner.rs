//! End-to-end scoring runs.
//!
//! [`Pipeline`] drives the stages in order for each configured year:
//! load → classify → restrict divisions → filter disagreements → score →
//! aggregate and rank → meta-rankings.

use super::config::{RunConfig, YearInput};
use super::source::JobPairSource;
use crate::classify::Classifier;
use crate::error::{Result, ScoringError};
use crate::filter::{remove_disagreements, restrict_divisions};
use crate::lookup::{Competitiveness, DisplayNames};
use crate::meta::{
    biggest_lead_ranking, largest_contribution_ranking, BiggestLead, LargestContribution,
};
use crate::model::{RawJobPair, ScoredJobPair, SolverSummary};
use crate::ranking::group_and_rank;
use crate::scoring::{ScoringEngine, ScoringPolicy, VerdictSet};
use std::time::Instant;
use tracing::info;

/// Outputs of one year.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YearResult {
    pub year: String,
    pub scored: Vec<ScoredJobPair>,
    pub ranking: Vec<SolverSummary>,
    pub biggest_lead: Vec<BiggestLead>,
    pub largest_contribution: Vec<LargestContribution>,
}

/// Outputs of a whole run, one entry per configured year in order.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    pub years: Vec<YearResult>,
}

impl RunResult {
    /// Scored job pairs of every year, concatenated.
    pub fn scored(&self) -> Vec<ScoredJobPair> {
        self.years.iter().flat_map(|y| y.scored.iter().cloned()).collect()
    }

    /// Rankings of every year, concatenated.
    pub fn ranking(&self) -> Vec<SolverSummary> {
        self.years.iter().flat_map(|y| y.ranking.iter().cloned()).collect()
    }

    pub fn year(&self, year: &str) -> Option<&YearResult> {
        self.years.iter().find(|y| y.year == year)
    }
}

/// A named policy variant for comparing rankings.
///
/// Only the verdict set and time limit vary; the remaining axes come from
/// the [`RunConfig`]. The effective limit per year is the lower of the
/// variant's and the year's.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variant {
    pub name: String,
    pub verdicts: VerdictSet,
    pub time_limit: f64,
}

impl Variant {
    /// Takes the verdict set and time limit of `policy`.
    pub fn from_policy(name: impl Into<String>, policy: &ScoringPolicy) -> Self {
        Self {
            name: name.into(),
            verdicts: policy.verdicts,
            time_limit: policy.time_limit,
        }
    }

    /// The four rankings of the competition report: all answers, unsat
    /// only, sat only, and a 24 second limit.
    pub fn report() -> Vec<Variant> {
        vec![
            Variant::from_policy("parallel", &ScoringPolicy::parallel()),
            Variant::from_policy("unsat", &ScoringPolicy::unsat_only()),
            Variant::from_policy("sat", &ScoringPolicy::sat_only()),
            Variant::from_policy("24s", &ScoringPolicy::twenty_four_seconds()),
        ]
    }
}

/// Ranking produced under one [`Variant`], across all years.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantResult {
    pub name: String,
    pub ranking: Vec<SolverSummary>,
}

/// Runs the scoring stages.
pub struct Pipeline;

impl Pipeline {
    /// Scores every configured year and computes rankings and
    /// meta-rankings.
    ///
    /// All inputs are checked for existence before any work starts.
    pub fn run<S: JobPairSource>(
        source: &S,
        config: &RunConfig,
        competitiveness: &Competitiveness,
        names: &DisplayNames,
    ) -> Result<RunResult> {
        let tables = Self::load_all(source, config)?;

        let mut years = Vec::with_capacity(tables.len());
        for (input, raw) in config.years.iter().zip(&tables) {
            let policy = config.policy_for(input);
            let scored = Self::process(raw, input, config, &policy, competitiveness)?;

            let start = Instant::now();
            let ranking = group_and_rank(&scored, competitiveness);
            let biggest_lead = biggest_lead_ranking(&ranking, names);
            let largest_contribution = largest_contribution_ranking(&scored, names)?;
            info!(
                year = %input.year,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "ranked"
            );

            years.push(YearResult {
                year: input.year.clone(),
                scored,
                ranking,
                biggest_lead,
                largest_contribution,
            });
        }
        Ok(RunResult { years })
    }

    /// Ranks the same inputs once per variant.
    pub fn run_variants<S: JobPairSource>(
        source: &S,
        config: &RunConfig,
        variants: &[Variant],
        competitiveness: &Competitiveness,
    ) -> Result<Vec<VariantResult>> {
        let tables = Self::load_all(source, config)?;

        variants
            .iter()
            .map(|variant| {
                info!(variant = %variant.name, "scoring variant");
                let mut scored = Vec::new();
                for (input, raw) in config.years.iter().zip(&tables) {
                    let policy = config
                        .policy_for(input)
                        .with_verdicts(variant.verdicts)
                        .capped_at(variant.time_limit);
                    scored.extend(Self::process(raw, input, config, &policy, competitiveness)?);
                }
                Ok(VariantResult {
                    name: variant.name.clone(),
                    ranking: group_and_rank(&scored, competitiveness),
                })
            })
            .collect()
    }

    /// Runs classification, filtering and scoring over one raw table.
    pub fn process(
        raw: &[RawJobPair],
        input: &YearInput,
        config: &RunConfig,
        policy: &ScoringPolicy,
        competitiveness: &Competitiveness,
    ) -> Result<Vec<ScoredJobPair>> {
        info!(
            year = %input.year,
            path = %input.csv_path.display(),
            family = %config.family_mode,
            disagreements = config.filters_disagreements(input),
            time_limit = policy.time_limit,
            use_families = policy.use_families,
            "processing results"
        );

        let start = Instant::now();
        let classified = Classifier::new(config.family_mode).classify_all(raw, &input.year)?;
        let mut pairs = restrict_divisions(&classified, &config.divisions);
        info!(elapsed_ms = start.elapsed().as_millis() as u64, "classified");

        if config.filters_disagreements(input) {
            let start = Instant::now();
            pairs = remove_disagreements(&pairs);
            info!(elapsed_ms = start.elapsed().as_millis() as u64, "removed disagreements");
        }

        let start = Instant::now();
        let scored = ScoringEngine::score_divisions(
            &pairs,
            policy,
            &input.year,
            competitiveness,
            config.parallel,
        )?;
        info!(elapsed_ms = start.elapsed().as_millis() as u64, rows = scored.len(), "scored");
        Ok(scored)
    }

    /// Validates the configuration, checks every input exists, then loads
    /// all tables.
    fn load_all<S: JobPairSource>(source: &S, config: &RunConfig) -> Result<Vec<Vec<RawJobPair>>> {
        config.validate()?;
        if let Some(missing) = config.years.iter().find(|y| !source.exists(&y.csv_path)) {
            return Err(ScoringError::MissingInput(missing.csv_path.clone()));
        }
        config
            .years
            .iter()
            .map(|input| source.load(&input.csv_path))
            .collect()
    }
}
