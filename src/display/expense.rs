//! Expense display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format expenses as a table, newest first
pub fn format_expense_table(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n\nUse 'billetera add <name> <amount>' to get started.\n"
            .to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id.short().to_string(),
        date: e.date.clone(),
        name: e.name.clone(),
        category: e.category.to_string(),
        amount: e.amount.format_with_symbol(symbol),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format a single expense
pub fn format_expense_details(expense: &Expense, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("  ID:       {}\n", expense.id));
    output.push_str(&format!("  Name:     {}\n", expense.name));
    output.push_str(&format!(
        "  Amount:   {}\n",
        expense.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("  Date:     {}\n", expense.date));
    output.push_str(&format!("  Category: {}\n", expense.category));
    output.push_str(&format!("  Period:   {}\n", expense.period));

    output
}
