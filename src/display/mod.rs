//! Terminal formatting
//!
//! Turns ledger data into text for the command-line front-end.

pub mod expense;
pub mod report;

pub use expense::{format_expense_details, format_expense_table};
pub use report::{format_categories, format_history, format_periods, format_summary};
