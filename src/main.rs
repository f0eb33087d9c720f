use anyhow::Result;
use clap::{Parser, Subcommand};

use billetera::audit::AuditLogger;
use billetera::cli::{handle_expense_command, handle_report_command, unlock};
use billetera::cli::{ExpenseCommands, ReportCommands};
use billetera::config::{BilleteraPaths, Settings};
use billetera::services::LedgerService;
use billetera::storage::ExpenseRepository;

#[derive(Parser)]
#[command(
    name = "billetera",
    version,
    about = "Personal expense tracker",
    long_about = "Billetera records what you spend, files it by month, and shows \
                  where the money went. Access to the ledger goes through a \
                  biometric gate; on devices without one use --skip-auth."
)]
struct Cli {
    /// Skip biometric authentication
    #[arg(long, global = true, env = "BILLETERA_SKIP_AUTH")]
    skip_auth: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    #[command(flatten)]
    Report(ReportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BilleteraPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    billetera::logging::init(&settings.log_level);

    let Some(command) = cli.command else {
        println!("Billetera - personal expense tracker");
        println!();
        println!("Run 'billetera --help' for usage information.");
        return Ok(());
    };

    match command {
        Commands::Expense(cmd) => {
            let mut ledger = open_ledger(&paths, &settings, cli.skip_auth)?;
            handle_expense_command(&mut ledger, &settings, cmd)?;
        }
        Commands::Report(cmd) => {
            let ledger = open_ledger(&paths, &settings, cli.skip_auth)?;
            handle_report_command(&ledger, &paths, &settings, cmd)?;
        }
        Commands::Config => print_config(&paths, &settings),
    }

    Ok(())
}

/// Pass the gate, then load the ledger
fn open_ledger(
    paths: &BilleteraPaths,
    settings: &Settings,
    skip_auth: bool,
) -> Result<LedgerService<ExpenseRepository>> {
    let grant = unlock(settings, skip_auth)?;

    paths.ensure_directories()?;
    let (ledger, notice) = LedgerService::open(ExpenseRepository::from_paths(paths), &grant);
    if let Some(notice) = notice {
        eprintln!("{}", notice);
    }

    Ok(if settings.audit_enabled {
        ledger.with_audit(AuditLogger::new(paths.audit_log()))
    } else {
        ledger
    })
}

fn print_config(paths: &BilleteraPaths, settings: &Settings) {
    println!("Billetera Configuration");
    println!("=======================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Expenses file:  {}", paths.expenses_file().display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:  {}", settings.currency_symbol);
    println!("  Default category: {}", settings.default_category);
    println!("  Log level:        {}", settings.log_level);
    println!("  Audit enabled:    {}", settings.audit_enabled);
}
