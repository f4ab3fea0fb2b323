//! Aggregation and ranking of solvers.
//!
//! Scored job pairs are summed per `(year, division, solver)` and ordered
//! within each `(year, division)` by a sequential [`RuleEngine`]:
//!
//! 1. `score_error` ascending
//! 2. `score_correct` descending
//! 3. `score_wallclock_time` ascending
//! 4. `score_cpu_time` ascending
//!
//! Remaining ties keep the aggregation order (solver name), which is a
//! known and accepted limitation.

mod aggregator;
mod rules;

pub use aggregator::{
    aggregate, group_and_rank, rank, solver_ranking, FastestCpu, FastestWallclock, FewestErrors,
    MostCorrect,
};
pub use rules::{PriorityRule, RuleEngine};
