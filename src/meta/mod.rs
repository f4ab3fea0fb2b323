//! Meta-rankings across divisions.
//!
//! - [`biggest_lead_ranking`]: divisions ordered by the winner's margin
//!   over the runner-up
//! - [`largest_contribution_ranking`]: divisions ordered by the largest
//!   single-solver contribution to the virtual best solver
//!
//! Both skip divisions contested by variants of a single solver only,
//! judged by [`DisplayNames`](crate::lookup::DisplayNames).

mod biggest_lead;
mod largest_contribution;
mod types;

pub use biggest_lead::biggest_lead_ranking;
pub use largest_contribution::largest_contribution_ranking;
pub use types::{BiggestLead, LargestContribution};
