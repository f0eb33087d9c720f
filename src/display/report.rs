//! Statistics display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::audit::AuditEntry;
use crate::models::{Category, MonthKey};
use crate::reports::MonthlySummary;

#[derive(Tabled)]
struct ShareRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Share")]
    share: String,
}

/// Format a month's total and category breakdown
pub fn format_summary(summary: &MonthlySummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} ({})\n",
        summary.period.label(),
        summary.period
    ));
    output.push_str(&format!(
        "Total spent: {}\n",
        summary.total.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Records:     {}\n", summary.count()));

    if summary.breakdown.is_empty() {
        output.push_str("\nNo spending recorded for this month.\n");
        return output;
    }

    let rows = summary.breakdown.iter().map(|share| ShareRow {
        category: share.category.to_string(),
        count: share.count,
        total: share.total.format_with_symbol(symbol),
        share: share.percentage_label(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    output.push('\n');
    output.push_str(&table.to_string());
    output.push('\n');

    output
}

/// Format the list of selectable months
pub fn format_periods(periods: &[MonthKey], current: MonthKey) -> String {
    let mut output = String::new();

    for period in periods {
        let marker = if *period == current { "  (current)" } else { "" };
        output.push_str(&format!("{}  {}{}\n", period, period.label(), marker));
    }

    output
}

/// Format the known categories with their icons
pub fn format_categories() -> String {
    let mut output = String::from("Categories:\n");

    for category in Category::KNOWN {
        output.push_str(&format!("  {}  ({})\n", category, category.color()));
    }

    output
}

/// Format audit entries, oldest first
pub fn format_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No history yet.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Expense};

    fn ledger() -> Vec<Expense> {
        vec![
            Expense::new(
                "Bus",
                Amount::parse("1.20").unwrap(),
                "2024-05-02",
                Category::Transport,
                "2024-05".parse().unwrap(),
            ),
            Expense::new(
                "Coffee",
                Amount::parse("3.50").unwrap(),
                "2024-05-01",
                Category::Food,
                "2024-05".parse().unwrap(),
            ),
        ]
    }

    #[test]
    fn test_summary() {
        let summary = MonthlySummary::for_period(&ledger(), "2024-05".parse().unwrap());
        let output = format_summary(&summary, "$");

        assert!(output.starts_with("May 2024 (2024-05)"));
        assert!(output.contains("Total spent: $4.70"));
        assert!(output.contains("74.5%"));
        assert!(output.contains("25.5%"));
    }

    #[test]
    fn test_empty_summary() {
        let summary = MonthlySummary::for_period(&ledger(), "2024-06".parse().unwrap());
        let output = format_summary(&summary, "$");

        assert!(output.contains("Total spent: $0.00"));
        assert!(output.contains("No spending recorded"));
    }

    #[test]
    fn test_periods_mark_current() {
        let current: MonthKey = "2024-06".parse().unwrap();
        let periods = vec![current, "2024-05".parse().unwrap()];
        let output = format_periods(&periods, current);

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "2024-06  June 2024  (current)");
        assert_eq!(lines[1], "2024-05  May 2024");
    }

    #[test]
    fn test_categories_list_known_set() {
        let output = format_categories();
        for category in Category::KNOWN {
            assert!(output.contains(category.label()));
        }
    }

    #[test]
    fn test_history() {
        assert_eq!(format_history(&[]), "No history yet.\n");

        let entry = AuditEntry::create(&ledger()[0]);
        assert!(format_history(&[entry]).contains("CREATE"));
    }
}
