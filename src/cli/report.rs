//! Report CLI commands
//!
//! Statistics, month and category listings, and the audit history.

use clap::Subcommand;

use crate::audit::AuditLogger;
use crate::config::{BilleteraPaths, Settings};
use crate::display::{format_categories, format_history, format_periods, format_summary};
use crate::error::BilleteraResult;
use crate::models::MonthKey;
use crate::services::LedgerService;
use crate::storage::ExpenseStore;

use super::expense::parse_period;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Show the total and category breakdown for a month
    Stats {
        /// Month to summarize (YYYY-MM), defaults to this month
        #[arg(short, long)]
        period: Option<String>,
    },
    /// List months that have expenses
    Periods,
    /// List the known categories
    Categories,
    /// Show recent additions and deletions
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Handle a report command
pub fn handle_report_command<S: ExpenseStore>(
    ledger: &LedgerService<S>,
    paths: &BilleteraPaths,
    settings: &Settings,
    cmd: ReportCommands,
) -> BilleteraResult<()> {
    match cmd {
        ReportCommands::Stats { period } => {
            let period = match period {
                Some(p) => parse_period(&p)?,
                None => MonthKey::current(),
            };
            let summary = ledger.monthly_summary(period);
            print!("{}", format_summary(&summary, &settings.currency_symbol));
        }

        ReportCommands::Periods => {
            print!(
                "{}",
                format_periods(&ledger.available_periods(), MonthKey::current())
            );
        }

        ReportCommands::Categories => {
            print!("{}", format_categories());
        }

        ReportCommands::History { limit } => {
            let logger = AuditLogger::new(paths.audit_log());
            let entries = logger.read_recent(limit)?;
            print!("{}", format_history(&entries));
        }
    }

    Ok(())
}
