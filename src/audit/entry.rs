//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Expense;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Expense was recorded
    Create,
    /// Expense was removed
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// ID of the affected expense
    pub expense_id: String,

    /// Name of the affected expense
    pub expense_name: String,

    /// The record before the operation (deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// The record after the operation (creates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Entry for a newly recorded expense
    pub fn create(expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            expense_id: expense.id.to_string(),
            expense_name: expense.name.clone(),
            before: None,
            after: serde_json::to_value(expense).ok(),
        }
    }

    /// Entry for a removed expense
    pub fn delete(expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            expense_id: expense.id.to_string(),
            expense_name: expense.name.clone(),
            before: serde_json::to_value(expense).ok(),
            after: None,
        }
    }

    /// Amount of the affected record, read back from the snapshot
    pub fn amount(&self) -> Option<f64> {
        self.after
            .as_ref()
            .or(self.before.as_ref())
            .and_then(|v| v.get("amount"))
            .and_then(|v| v.as_f64())
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.expense_id,
            self.expense_name
        );

        if let Some(amount) = self.amount() {
            output.push_str(&format!(" {:.2}", amount));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Category};

    fn expense() -> Expense {
        let mut expense = Expense::new(
            "Coffee",
            Amount::parse("3.5").unwrap(),
            "2024-05-01",
            Category::Food,
            "2024-05".parse().unwrap(),
        );
        expense.id = "exp-1".parse().unwrap();
        expense
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(&expense());

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.expense_id, "exp-1");
        assert!(entry.before.is_none());
        assert_eq!(entry.after.as_ref().unwrap()["name"], "Coffee");
        assert_eq!(entry.amount(), Some(3.5));
    }

    #[test]
    fn test_delete_entry() {
        let entry = AuditEntry::delete(&expense());

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_human_readable_format() {
        let formatted = AuditEntry::delete(&expense()).format_human_readable();

        assert!(formatted.contains("DELETE"));
        assert!(formatted.contains("exp-1 (Coffee)"));
        assert!(formatted.ends_with("3.50"));
    }

    #[test]
    fn test_serialization_skips_empty_snapshots() {
        let json = serde_json::to_string(&AuditEntry::create(&expense())).unwrap();
        assert!(!json.contains("\"before\""));
        assert!(json.contains("\"after\""));
    }
}
