//! Core data models for Billetera
//!
//! This module contains the data structures that represent the expense
//! ledger: expense records, their amounts, categories and month keys.

pub mod amount;
pub mod category;
pub mod expense;
pub mod ids;
pub mod period;

pub use amount::{Amount, AmountParseError};
pub use category::Category;
pub use expense::{Expense, NewExpense};
pub use ids::ExpenseId;
pub use period::{MonthKey, PeriodParseError};
