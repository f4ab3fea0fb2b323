//! Virtual best solver (VBS) analysis.
//!
//! Follows the largest-contribution definitions of the SMT-COMP 2019
//! rules (section 7.3.2).

mod analyzer;

pub use analyzer::{contribution, vbss};
