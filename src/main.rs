use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pocketbudget::audit::AuditLogger;
use pocketbudget::cli::{
    handle_category_command, handle_expense_command, handle_income_command, CategoryCommands,
    ExpenseCommands, IncomeCommands,
};
use pocketbudget::config::paths::DATA_DIR_ENV;
use pocketbudget::config::{BudgetPaths, Settings};
use pocketbudget::display::{format_history, format_summary};
use pocketbudget::services::{BudgetStore, BudgetSummary};
use pocketbudget::storage::LoadStatus;

#[derive(Parser)]
#[command(
    name = "pocketbudget",
    version,
    about = "Percentage-based personal budget tracker",
    long_about = "PocketBudget splits a monthly income into categories by percentage \
                  and tracks what you spend in each of them."
)]
struct Cli {
    /// Directory holding settings, budget data and the audit log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(CategoryCommands),

    /// Expense management commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Show allocated, spent and remaining amounts for every category
    Summary,

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    pocketbudget::logging::init_tracing();

    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => BudgetPaths::with_base_dir(dir),
        None => BudgetPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let mut store = BudgetStore::open(paths.budget_file());
    if settings.audit_enabled {
        store = store.with_audit_log(AuditLogger::new(paths.audit_log()));
    }
    if let LoadStatus::Recovered { reason } = store.load_status() {
        eprintln!("Warning: budget data could not be read ({}).", reason);
        eprintln!("Starting with an empty budget; the next change will overwrite the file.");
    }

    match cli.command {
        Some(Commands::Income(cmd)) => {
            handle_income_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Summary) => {
            let summary = BudgetSummary::for_budget(store.budget());
            print!("{}", format_summary(&summary, &settings.currency_symbol));
        }
        Some(Commands::History { limit }) => {
            let entries = AuditLogger::new(paths.audit_log()).read_recent(limit)?;
            print!("{}", format_history(&entries));
        }
        Some(Commands::Init) => {
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialized PocketBudget at: {}", paths.base_dir().display());
            println!();
            println!("Next steps:");
            println!("  pocketbudget income set <amount>");
            println!("  pocketbudget category add <name> <percentage>");
        }
        Some(Commands::Config) => {
            println!("PocketBudget Configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Budget file:    {}", paths.budget_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        None => {
            println!("PocketBudget - percentage-based budgeting");
            println!();
            println!("Run 'pocketbudget --help' for usage information.");
            println!("Run 'pocketbudget summary' to see your budget.");
        }
    }

    Ok(())
}
