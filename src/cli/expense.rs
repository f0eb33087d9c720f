//! Expense CLI commands
//!
//! Implements CLI commands for recording, listing and deleting expenses.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::{BilleteraError, BilleteraResult};
use crate::models::category::FALLBACK_ICON;
use crate::models::{Category, MonthKey, NewExpense};
use crate::reports::total_for;
use crate::services::LedgerService;
use crate::storage::ExpenseStore;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        name: String,
        /// Amount (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Date as you want it shown, defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Category (Food, Transport, Books, Entertainment, Health, Other)
        #[arg(short, long)]
        category: Option<String>,
        /// Month to file the expense under (YYYY-MM), defaults to this month
        #[arg(short, long)]
        period: Option<String>,
    },
    /// List expenses for a month
    List {
        /// Month to show (YYYY-MM), defaults to this month
        #[arg(short, long, conflicts_with = "all")]
        period: Option<String>,
        /// Show every month
        #[arg(short, long)]
        all: bool,
    },
    /// Delete an expense
    Delete {
        /// Expense ID (or a unique prefix of it)
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle an expense command
pub fn handle_expense_command<S: ExpenseStore>(
    ledger: &mut LedgerService<S>,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> BilleteraResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            date,
            category,
            period,
        } => {
            let category = match category {
                Some(label) => label.parse::<Category>().unwrap_or_default(),
                None => settings.default_category.clone(),
            };
            if let Some(note) = unknown_category_note(&category) {
                eprintln!("{}", note);
            }

            let date = date.unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());
            let mut input = NewExpense::new(name, amount).date(date).category(category);
            if let Some(period) = period {
                input = input.period(parse_period(&period)?);
            }

            let expense = ledger.add_expense(input)?;
            println!(
                "Recorded: {} {} ({})",
                expense.name,
                expense.amount.format_with_symbol(symbol),
                expense.category
            );
            println!("  ID: {}", expense.id);
        }

        ExpenseCommands::List { period, all } => {
            if all {
                println!("All expenses");
                print!("{}", format_expense_table(ledger.expenses(), symbol));
                println!("Total: {}", ledger.total().format_with_symbol(symbol));
            } else {
                let period = match period {
                    Some(p) => parse_period(&p)?,
                    None => MonthKey::current(),
                };
                let expenses = ledger.filter_by_period(&period);
                let total = total_for(&expenses);

                println!("Expenses for {}", period.label());
                print!("{}", format_expense_table(&expenses, symbol));
                println!("Total: {}", total.format_with_symbol(symbol));
            }
        }

        ExpenseCommands::Delete { id, force } => {
            let expense_id = ledger
                .find(&id)?
                .map(|e| e.id.clone())
                .ok_or_else(|| BilleteraError::expense_not_found(&id))?;

            let Some(request) = ledger.request_delete(&expense_id) else {
                return Err(BilleteraError::expense_not_found(&id));
            };

            if !force {
                println!("About to delete expense:");
                print!("{}", format_expense_details(request.expense(), symbol));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            if let Some(deleted) = ledger.confirm_delete(request)? {
                println!(
                    "Deleted expense: {} ({})",
                    deleted.name,
                    deleted.amount.format_with_symbol(symbol)
                );
            }
        }
    }

    Ok(())
}

/// Warning for a label outside the known set
fn unknown_category_note(category: &Category) -> Option<String> {
    if category.is_known() {
        return None;
    }
    Some(format!(
        "Note: '{}' is not a known category; it is kept as typed and shown with the {} icon.",
        category.display_label(),
        FALLBACK_ICON
    ))
}

/// Parse a `YYYY-MM` month argument
pub(crate) fn parse_period(input: &str) -> BilleteraResult<MonthKey> {
    input
        .parse()
        .map_err(|e| BilleteraError::Validation(format!("Invalid period '{}': {}", input, e)))
}
