//! Derived views over the ledger
//!
//! Everything here is a pure function of a slice of expenses. Nothing is
//! cached; callers recompute after every mutation.

pub mod breakdown;
pub mod summary;

pub use breakdown::{category_breakdown, CategoryBreakdown, CategoryShare};
pub use summary::{available_periods, filter_by_period, total_for, MonthlySummary};
