//! Ledger service
//!
//! Owns the in-memory ledger and the store behind it. Every mutation builds
//! the new collection, persists it, and only then replaces the in-memory
//! copy, so memory and disk never disagree.

use tracing::{info, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::auth::AccessGrant;
use crate::error::{BilleteraError, BilleteraResult};
use crate::models::{Amount, AmountParseError, Expense, ExpenseId, MonthKey, NewExpense};
use crate::reports::{self, MonthlySummary};
use crate::storage::ExpenseStore;

use super::notice::Notice;

/// Pending deletion; dropping it cancels
#[derive(Debug, Clone)]
#[must_use = "a deletion only happens once confirmed"]
pub struct DeleteRequest {
    expense: Expense,
}

impl DeleteRequest {
    /// The record that would be removed
    pub fn expense(&self) -> &Expense {
        &self.expense
    }

    pub fn id(&self) -> &ExpenseId {
        &self.expense.id
    }
}

/// Service for expense management
pub struct LedgerService<S> {
    store: S,
    expenses: Vec<Expense>,
    audit: Option<AuditLogger>,
}

impl<S: ExpenseStore> LedgerService<S> {
    /// Open the ledger, loading the store once
    ///
    /// A store that cannot be read yields an empty ledger plus a warning
    /// notice for the user.
    pub fn open(store: S, grant: &AccessGrant) -> (Self, Option<Notice>) {
        let (expenses, notice) = match store.load() {
            Ok(expenses) => (expenses, None),
            Err(e) => {
                warn!(error = %e, "starting with an empty ledger");
                (Vec::new(), Some(Notice::from(&e)))
            }
        };
        info!(access = %grant.kind(), count = expenses.len(), "ledger opened");

        let service = Self {
            store,
            expenses,
            audit: None,
        };
        (service, notice)
    }

    /// Record mutations in an audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// All records, newest first
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// The backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a record by ID
    pub fn get(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == *id)
    }

    /// Find a record by full ID or unambiguous prefix
    pub fn find(&self, identifier: &str) -> BilleteraResult<Option<&Expense>> {
        let identifier = identifier.trim();
        if let Some(exact) = self.expenses.iter().find(|e| e.id.as_str() == identifier) {
            return Ok(Some(exact));
        }

        let mut matches = self
            .expenses
            .iter()
            .filter(|e| e.id.matches_prefix(identifier));
        match (matches.next(), matches.next()) {
            (Some(found), None) => Ok(Some(found)),
            (None, _) => Ok(None),
            (Some(_), Some(_)) => Err(BilleteraError::Validation(format!(
                "'{}' matches more than one expense; use more characters",
                identifier
            ))),
        }
    }

    /// Validate and record a new expense
    ///
    /// Checks, in order: the trimmed name is non-empty, the amount is a
    /// number greater than zero and within the storable range. Date and category are taken as given. The
    /// new record goes first.
    pub fn add_expense(&mut self, input: NewExpense) -> BilleteraResult<Expense> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(BilleteraError::Validation("Expense name is required".into()));
        }

        let amount = Amount::parse_positive(&input.amount).map_err(|e| match e {
            AmountParseError::Empty => BilleteraError::InvalidAmount(String::new()),
            AmountParseError::InvalidFormat(raw) | AmountParseError::NotPositive(raw) => {
                BilleteraError::InvalidAmount(raw)
            }
            out_of_range @ (AmountParseError::TooLarge(_) | AmountParseError::TooPrecise(_)) => {
                BilleteraError::AmountOutOfRange(out_of_range.to_string())
            }
        })?;

        let period = input.period.unwrap_or_else(MonthKey::current);
        let expense = Expense::new(name, amount, input.date, input.category, period);

        let mut updated = Vec::with_capacity(self.expenses.len() + 1);
        updated.push(expense.clone());
        updated.extend(self.expenses.iter().cloned());
        self.commit(updated)?;

        info!(id = %expense.id, period = %expense.period, "expense added");
        self.audit(AuditEntry::create(&expense));
        Ok(expense)
    }

    /// Remove a record
    ///
    /// Idempotent: an unknown id is a no-op and returns `Ok(None)` without
    /// touching the store.
    pub fn delete_expense(&mut self, id: &ExpenseId) -> BilleteraResult<Option<Expense>> {
        let Some(position) = self.expenses.iter().position(|e| e.id == *id) else {
            return Ok(None);
        };

        let mut updated = self.expenses.clone();
        let removed = updated.remove(position);
        self.commit(updated)?;

        info!(id = %removed.id, "expense deleted");
        self.audit(AuditEntry::delete(&removed));
        Ok(Some(removed))
    }

    /// First phase of a delete: capture the record awaiting confirmation
    pub fn request_delete(&self, id: &ExpenseId) -> Option<DeleteRequest> {
        self.get(id).cloned().map(|expense| DeleteRequest { expense })
    }

    /// Second phase of a delete
    pub fn confirm_delete(&mut self, request: DeleteRequest) -> BilleteraResult<Option<Expense>> {
        self.delete_expense(&request.expense.id)
    }

    /// Records in `period`, newest first
    pub fn filter_by_period(&self, period: &MonthKey) -> Vec<Expense> {
        reports::filter_by_period(&self.expenses, period)
    }

    /// Sum of all records
    pub fn total(&self) -> Amount {
        reports::total_for(&self.expenses)
    }

    /// Periods with records, newest first, plus the current month
    pub fn available_periods(&self) -> Vec<MonthKey> {
        reports::available_periods(&self.expenses, MonthKey::current())
    }

    /// Totals and breakdown for one month
    pub fn monthly_summary(&self, period: MonthKey) -> MonthlySummary {
        MonthlySummary::for_period(&self.expenses, period)
    }

    fn commit(&mut self, updated: Vec<Expense>) -> BilleteraResult<()> {
        self.store.save(&updated)?;
        self.expenses = updated;
        Ok(())
    }

    fn audit(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                warn!(error = %e, "failed to write audit entry");
            }
        }
    }
}
