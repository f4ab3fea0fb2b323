use proptest::prelude::*;
use std::cmp::Ordering;
use u_scoring::family::FamilyWeights;
use u_scoring::filter::remove_disagreements;
use u_scoring::lookup::Competitiveness;
use u_scoring::model::{JobPair, SolverSummary, Verdict};
use u_scoring::ranking::group_and_rank;
use u_scoring::scoring::{ScoringEngine, ScoringPolicy};
use u_scoring::vbs::vbss;

const SOLVERS: [&str; 4] = ["alpha", "beta", "gamma", "delta"];
const FAMILIES: [&str; 3] = ["crafted", "industrial", "random/sub"];

fn arb_verdict() -> impl Strategy<Value = Verdict> {
    prop_oneof![Just(Verdict::Sat), Just(Verdict::Unsat), Just(Verdict::Unknown)]
}

/// A single-division table. Benchmarks are drawn from a small pool so that
/// solvers overlap on them; each benchmark has one expected status.
fn arb_table() -> impl Strategy<Value = Vec<JobPair>> {
    let statuses = prop::collection::vec(arb_verdict(), FAMILIES.len() * 6);
    let rows = prop::collection::vec(
        (
            0usize..FAMILIES.len(),
            0usize..6,
            0usize..SOLVERS.len(),
            arb_verdict(),
            0.0f64..100.0,
            0.0f64..100.0,
        ),
        1..60,
    );
    (statuses, rows).prop_map(|(statuses, rows)| {
        rows.into_iter()
            .map(|(family, bench, solver, result, cpu, wall)| JobPair {
                benchmark: format!("{}/b{bench}.smt2", FAMILIES[family]),
                division: "QF_LIA".into(),
                family: FAMILIES[family].into(),
                solver: SOLVERS[solver].into(),
                result,
                expected: statuses[family * 6 + bench],
                cpu_time: cpu,
                wallclock_time: wall,
                year: "2019".into(),
            })
            .collect()
    })
}

fn policy(use_families: bool) -> ScoringPolicy {
    ScoringPolicy::default()
        .with_time_limit(50.0)
        .with_families(use_families)
}

// ── Family weights normalize to one ─────────────────────────────────────

proptest! {
    #[test]
    fn family_weights_normalize(table in arb_table()) {
        let weights = FamilyWeights::compute(&table).unwrap();
        prop_assert!((weights.normalization_total() - 1.0).abs() < 1e-9);
        for (_, w) in weights.iter() {
            prop_assert!(w.alpha_prime_b > 0.0);
        }
    }
}

// ── Disagreement filter is idempotent ───────────────────────────────────

proptest! {
    #[test]
    fn disagreement_filter_idempotent(table in arb_table()) {
        let once = remove_disagreements(&table);
        let twice = remove_disagreements(&once);
        prop_assert_eq!(once.len(), twice.len());
        prop_assert_eq!(once, twice);
    }
}

// ── Ranking follows the lexicographic order ─────────────────────────────

fn lexicographic(a: &SolverSummary, b: &SolverSummary) -> Ordering {
    a.score_error
        .total_cmp(&b.score_error)
        .then(b.score_correct.total_cmp(&a.score_correct))
        .then(a.score_wallclock_time.total_cmp(&b.score_wallclock_time))
        .then(a.score_cpu_time.total_cmp(&b.score_cpu_time))
}

proptest! {
    #[test]
    fn ranking_is_lexicographic(table in arb_table(), use_families in any::<bool>()) {
        let comp = Competitiveness::new();
        let scored =
            ScoringEngine::score("QF_LIA", &table, &policy(use_families), "2019", &comp).unwrap();
        let ranking = group_and_rank(&scored, &comp);

        for (position, row) in ranking.iter().enumerate() {
            prop_assert_eq!(row.rank, position);
        }
        for pair in ranking.windows(2) {
            prop_assert_ne!(lexicographic(&pair[0], &pair[1]), Ordering::Greater);
        }
    }
}

// ── Excluding a solver never raises the virtual best score ──────────────

proptest! {
    #[test]
    fn vbs_is_monotone(
        table in arb_table(),
        use_families in any::<bool>(),
        excluded in 0usize..SOLVERS.len(),
    ) {
        let comp = Competitiveness::new();
        let scored =
            ScoringEngine::score("QF_LIA", &table, &policy(use_families), "2019", &comp).unwrap();

        let all = vbss(&scored, None).unwrap();
        let without = vbss(&scored, Some(SOLVERS[excluded])).unwrap();
        prop_assert!(without <= all + 1e-9);
        prop_assert!(without >= 0.0);
    }
}
