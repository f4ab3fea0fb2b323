//! End-to-end runs over in-memory result tables.

use std::path::Path;
use u_scoring::classify::FamilyMode;
use u_scoring::compare::{changed_winners, winners, winners_label};
use u_scoring::filter::DivisionFilter;
use u_scoring::lookup::{Competitiveness, DisplayNames};
use u_scoring::model::RawJobPair;
use u_scoring::model::Verdict::{self, Sat, Unknown, Unsat};
use u_scoring::pipeline::{JobPairSource, MemorySource, Pipeline, RunConfig, Variant, YearInput};
use u_scoring::{Result, ScoringError};

fn raw(benchmark: &str, solver: &str, result: Verdict, expected: Verdict, time: f64) -> RawJobPair {
    RawJobPair::new(benchmark, solver, result, expected, time, time)
}

/// Two divisions; `fast` and `slow` tie on answers in QF_LIA, `fast` is
/// quicker. `fast` is wrong on one QF_BV benchmark. `b2` is a
/// disagreement between sound solvers.
fn results_2019() -> Vec<RawJobPair> {
    vec![
        raw("QF_LIA/fam1/b1.smt2", "fast", Sat, Sat, 1.0),
        raw("QF_LIA/fam1/b1.smt2", "slow", Sat, Sat, 5.0),
        raw("QF_LIA/fam1/b1.smt2", "ref", Sat, Sat, 0.5),
        raw("QF_LIA/fam1/b2.smt2", "slow", Sat, Unknown, 2.0),
        raw("QF_LIA/fam1/b2.smt2", "ref", Unsat, Unknown, 2.0),
        raw("QF_LIA/fam2/deep/b3.smt2", "fast", Unsat, Unsat, 3.0),
        raw("QF_LIA/fam2/deep/b3.smt2", "slow", Unsat, Unsat, 8.0),
        raw("QF_LIA/fam2/deep/b3.smt2", "ref", Unknown, Unsat, 3.0),
        raw("QF_BV/x/c1.smt2", "fast", Sat, Unsat, 1.0),
        raw("QF_BV/x/c1.smt2", "slow", Unsat, Unsat, 4.0),
        raw("QF_BV/x/c2.smt2", "fast", Sat, Sat, 1.0),
        raw("QF_BV/x/c2.smt2", "slow", Sat, Sat, 30.0),
    ]
}

fn source() -> MemorySource {
    MemorySource::new()
        .with_table("2019.csv", results_2019())
        .with_table("2018.csv", vec![raw("QF_LIA/fam1/b1.smt2", "slow", Sat, Sat, 1.0)])
}

fn config() -> RunConfig {
    RunConfig::default().with_year(YearInput::new("2019", "2019.csv", 20.0))
}

fn comp() -> Competitiveness {
    Competitiveness::new().with_non_competitive("2019", "ref")
}

// ---- Full run ----

#[test]
fn test_full_run_rankings() {
    let result = Pipeline::run(&source(), &config(), &comp(), &DisplayNames::new()).unwrap();
    assert_eq!(result.years.len(), 1);
    let year = result.year("2019").unwrap();

    // b2 is dropped for every solver.
    assert!(year.scored.iter().all(|row| row.benchmark() != "fam1/b2.smt2"));

    let lia: Vec<_> = year.ranking.iter().filter(|s| s.division == "QF_LIA").collect();
    // ref is fastest on b1 but gave up on b3: fewer correct answers.
    assert_eq!(lia[0].solver, "fast");
    assert_eq!(lia[1].solver, "slow");
    assert_eq!(lia[2].solver, "ref");
    assert!(!lia[2].competitive);

    let bv: Vec<_> = year.ranking.iter().filter(|s| s.division == "QF_BV").collect();
    // slow misses c2 at the 20s limit but makes no errors.
    assert_eq!(bv[0].solver, "slow");
    assert_eq!(bv[0].correct, 1);
    assert_eq!(bv[1].solver, "fast");
    assert_eq!(bv[1].error, 1);
}

#[test]
fn test_full_run_psolved() {
    let result = Pipeline::run(&source(), &config(), &comp(), &DisplayNames::new()).unwrap();
    let fast = result
        .ranking()
        .into_iter()
        .find(|s| s.division == "QF_LIA" && s.solver == "fast")
        .unwrap();
    // Two QF_LIA benchmarks survive the filter, both solved.
    assert!((fast.psolved - 100.0).abs() < 1e-10);
}

#[test]
fn test_full_run_meta_rankings() {
    let names = DisplayNames::new().with_name("fast", "Fast Solver");
    let result = Pipeline::run(&source(), &config(), &comp(), &names).unwrap();
    let year = &result.years[0];

    // ref is non-competitive, so both divisions compare fast and slow.
    assert_eq!(year.biggest_lead.len(), 2);
    let lia = year
        .biggest_lead
        .iter()
        .find(|lead| lead.division == "QF_LIA")
        .unwrap();
    assert_eq!(lia.first, "fast");
    assert_eq!(lia.second, "slow");

    for entry in &year.largest_contribution {
        assert!(entry.score >= 0.0 && entry.score <= 1.0 + 1e-10);
    }
}

#[test]
fn test_family_mode_changes_weights() {
    let bottom = Pipeline::run(
        &source(),
        &config().with_families(true),
        &comp(),
        &DisplayNames::new(),
    )
    .unwrap();
    let top = Pipeline::run(
        &source(),
        &config().with_families(true).with_family_mode(FamilyMode::Top),
        &comp(),
        &DisplayNames::new(),
    )
    .unwrap();

    let family = |r: &u_scoring::pipeline::RunResult| {
        r.years[0]
            .scored
            .iter()
            .find(|row| row.benchmark() == "fam2/deep/b3.smt2")
            .map(|row| row.pair.family.clone())
            .unwrap()
    };
    assert_eq!(family(&bottom), "fam2/deep");
    assert_eq!(family(&top), "fam2");
}

// ---- Configuration and inputs ----

#[test]
fn test_missing_input_reported_before_scoring() {
    let config = config().with_year(YearInput::new("2020", "2020.csv", 20.0));
    let err = Pipeline::run(&source(), &config, &comp(), &DisplayNames::new()).unwrap_err();
    assert_eq!(err, ScoringError::MissingInput("2020.csv".into()));
}

struct FailingSource;

impl JobPairSource for FailingSource {
    fn exists(&self, _path: &Path) -> bool {
        true
    }

    fn load(&self, path: &Path) -> Result<Vec<RawJobPair>> {
        Err(ScoringError::Load {
            path: path.to_path_buf(),
            message: "truncated file".into(),
        })
    }
}

#[test]
fn test_load_error_propagates() {
    let err = Pipeline::run(&FailingSource, &config(), &comp(), &DisplayNames::new()).unwrap_err();
    assert!(matches!(err, ScoringError::Load { .. }));
}

#[test]
fn test_division_restriction() {
    let config = config().with_divisions(DivisionFilter::only(["QF_BV"]));
    let result = Pipeline::run(&source(), &config, &comp(), &DisplayNames::new()).unwrap();
    assert!(result.ranking().iter().all(|s| s.division == "QF_BV"));
    assert!(!result.ranking().is_empty());
}

#[test]
fn test_multiple_years() {
    let config = config().with_year(YearInput::new("2018", "2018.csv", 20.0));
    let result = Pipeline::run(&source(), &config, &comp(), &DisplayNames::new()).unwrap();
    assert_eq!(result.years.len(), 2);
    assert_eq!(result.years[1].year, "2018");
    // ref is only non-competitive in 2019.
    assert!(result.years[1].ranking.iter().all(|s| s.competitive));

    // Scored rows of all years, in year order: ten 2019 rows survive the
    // disagreement filter, then the single 2018 row.
    let scored = result.scored();
    assert_eq!(scored.len(), 11);
    assert!(scored[..10].iter().all(|row| row.year() == "2019"));
    assert_eq!(scored[10].year(), "2018");
    assert_eq!(scored[10].solver(), "slow");
}

#[test]
fn test_per_year_scheme_overrides() {
    // 2018 here plays the role of an early year: no filter, no weighting.
    let config = RunConfig::default()
        .with_families(true)
        .with_year(YearInput::new("2019", "2019.csv", 20.0))
        .with_year(
            YearInput::new("2018", "2019.csv", 20.0)
                .with_families(false)
                .with_disagreement_filter(false),
        );
    let result = Pipeline::run(&source(), &config, &comp(), &DisplayNames::new()).unwrap();

    let filtered = result.year("2019").unwrap();
    let unfiltered = result.year("2018").unwrap();
    assert!(filtered.scored.iter().all(|row| row.benchmark() != "fam1/b2.smt2"));
    assert!(unfiltered.scored.iter().any(|row| row.benchmark() == "fam1/b2.smt2"));

    // Weighted rows carry the family weight; unweighted rows carry 1.
    assert!(filtered.scored.iter().any(|row| (row.alpha_prime_b - 1.0).abs() > 1e-10));
    assert!(unfiltered
        .scored
        .iter()
        .all(|row| (row.alpha_prime_b - 1.0).abs() < 1e-10));
}

#[test]
fn test_malformed_benchmark() {
    let source = MemorySource::new()
        .with_table("2019.csv", vec![raw("nodivision", "fast", Sat, Sat, 1.0)]);
    let err = Pipeline::run(&source, &config(), &comp(), &DisplayNames::new()).unwrap_err();
    assert!(matches!(err, ScoringError::MalformedBenchmark(_)));
}

// ---- Variants ----

#[test]
fn test_report_variants_change_winners() {
    let config = RunConfig::default().with_year(YearInput::new("2019", "2019.csv", 2400.0));
    let variants = Variant::report();
    let results = Pipeline::run_variants(&source(), &config, &variants, &comp()).unwrap();
    assert_eq!(results.len(), 4);

    let parallel = &results[0].ranking;
    let sat = &results[2].ranking;
    assert_eq!(winners(parallel).len(), 2);

    // Sat-only: everyone solves b1 alone in QF_LIA and ref has the lowest
    // total time. QF_BV is unchanged.
    let changed = changed_winners(parallel, sat, &DisplayNames::new());
    assert_eq!(changed.len(), 1);
    assert_eq!(changed[0].division, "QF_LIA");
    assert_eq!(changed[0].solver, "ref");

    // 24s: slow misses c2 (30s) in QF_BV; fast still errs.
    let short = &results[3].ranking;
    let bv_winner = winners(short).into_iter().find(|s| s.division == "QF_BV").unwrap();
    assert_eq!(bv_winner.solver, "slow");
    assert_eq!(bv_winner.correct, 1);
}

#[test]
fn test_winners_label_brackets_non_competitive() {
    let only_ref = MemorySource::new().with_table(
        "2019.csv",
        vec![
            raw("QF_LIA/f/b.smt2", "ref", Sat, Sat, 1.0),
            raw("QF_LIA/f/b.smt2", "fast", Unknown, Sat, 1.0),
        ],
    );
    let result = Pipeline::run(&only_ref, &config(), &comp(), &DisplayNames::new()).unwrap();
    let label = winners_label(&result.ranking(), "2019", "QF_LIA", &comp(), &DisplayNames::new());
    assert_eq!(label, "[ref]");
}
