//! Income CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;
use crate::services::{BudgetStore, BudgetSummary};

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Set the monthly income
    Set {
        /// Monthly income amount (e.g., "5000" or "5000.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show the monthly income and how much of it is allocated
    Show,
}

/// Handle an income command
pub fn handle_income_command(
    store: &mut BudgetStore,
    settings: &Settings,
    cmd: IncomeCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        IncomeCommands::Set { amount } => {
            let amount = Money::parse(&amount)
                .map_err(|e| BudgetError::Validation(format!("Invalid amount: {}", e)))?;

            store.set_monthly_income(amount)?;
            println!(
                "Monthly income set to {}",
                amount.format_with_symbol(symbol)
            );
        }

        IncomeCommands::Show => {
            let summary = BudgetSummary::for_budget(store.budget());
            println!(
                "Monthly income: {}",
                summary.income.format_with_symbol(symbol)
            );
            println!(
                "Allocated:      {} ({})",
                summary.total_percentage,
                summary.total_allocated.format_with_symbol(symbol)
            );
            println!("Unallocated:    {}", summary.unallocated_percentage);
        }
    }

    Ok(())
}
