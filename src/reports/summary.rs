//! Period filtering, totals and the monthly summary

use std::collections::BTreeSet;

use crate::models::{Amount, Expense, MonthKey};

use super::breakdown::{category_breakdown, CategoryBreakdown};

/// Records in `period`, in ledger order
pub fn filter_by_period(expenses: &[Expense], period: &MonthKey) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| e.period == *period)
        .cloned()
        .collect()
}

/// Sum of amounts at full precision
pub fn total_for(expenses: &[Expense]) -> Amount {
    expenses.iter().map(|e| e.amount).sum()
}

/// Distinct periods, newest first, always including `current`
pub fn available_periods(expenses: &[Expense], current: MonthKey) -> Vec<MonthKey> {
    let mut periods: BTreeSet<MonthKey> = expenses.iter().map(|e| e.period).collect();
    periods.insert(current);
    periods.into_iter().rev().collect()
}

/// Everything the statistics view shows for one month
#[derive(Debug, Clone)]
pub struct MonthlySummary {
    pub period: MonthKey,
    pub expenses: Vec<Expense>,
    pub total: Amount,
    pub breakdown: CategoryBreakdown,
}

impl MonthlySummary {
    /// Build the summary of `period`
    pub fn for_period(expenses: &[Expense], period: MonthKey) -> Self {
        let expenses = filter_by_period(expenses, &period);
        let total = total_for(&expenses);
        let breakdown = category_breakdown(&expenses);

        Self {
            period,
            expenses,
            total,
            breakdown,
        }
    }

    /// Number of records in the month
    pub fn count(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
