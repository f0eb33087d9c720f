//! Expense model
//!
//! A single user-entered expense and the command input used to create one.

use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::category::Category;
use super::ids::ExpenseId;
use super::period::MonthKey;

/// A recorded expense
///
/// Serialized as `{id, name, amount, date, category, period}`. Records written
/// without a `period` get one inferred from `date`, falling back to the
/// current month; records without a `category` default to Other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredExpense")]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Trimmed, non-empty label
    pub name: String,

    /// Positive magnitude
    pub amount: Amount,

    /// Free-form date as entered by the user
    pub date: String,

    /// Category label
    pub category: Category,

    /// Month bucket
    pub period: MonthKey,
}

impl Expense {
    /// Create a new expense with a fresh id
    ///
    /// Callers are expected to have validated the fields; see
    /// [`LedgerService::add_expense`](crate::services::LedgerService::add_expense).
    pub fn new(
        name: impl Into<String>,
        amount: Amount,
        date: impl Into<String>,
        category: Category,
        period: MonthKey,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            amount,
            date: date.into(),
            category,
            period,
        }
    }
}

/// On-disk shape, tolerant of fields missing from older records
#[derive(Deserialize)]
struct StoredExpense {
    id: ExpenseId,
    name: String,
    amount: Amount,
    #[serde(default)]
    date: String,
    #[serde(default = "default_stored_category")]
    category: Category,
    #[serde(default)]
    period: Option<String>,
}

fn default_stored_category() -> Category {
    Category::Other
}

impl From<StoredExpense> for Expense {
    fn from(stored: StoredExpense) -> Self {
        let period = stored
            .period
            .as_deref()
            .and_then(|p| p.parse().ok())
            .or_else(|| MonthKey::infer_from_date_str(&stored.date))
            .unwrap_or_else(MonthKey::current);

        Self {
            id: stored.id,
            name: stored.name,
            amount: stored.amount,
            date: stored.date,
            category: stored.category,
            period,
        }
    }
}

/// Command input for adding an expense
///
/// `amount` is the raw text typed by the user; validation happens when the
/// ledger accepts the command.
#[derive(Debug, Clone, Default)]
pub struct NewExpense {
    pub name: String,
    pub amount: String,
    pub date: String,
    pub category: Category,
    /// Explicitly selected month; `None` means the current month
    pub period: Option<MonthKey>,
}

impl NewExpense {
    /// Create a command with the required fields
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            ..Self::default()
        }
    }

    /// Set the date
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Set the category
    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Set the month bucket
    pub fn period(mut self, period: MonthKey) -> Self {
        self.period = Some(period);
        self
    }
}
