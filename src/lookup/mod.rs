//! Read-only lookup tables supplied by the caller.
//!
//! Both tables are loaded once per run and passed by reference into the
//! scoring and ranking calls; nothing in the crate holds them globally.

mod competitive;
mod names;

pub use competitive::Competitiveness;
pub use names::DisplayNames;
