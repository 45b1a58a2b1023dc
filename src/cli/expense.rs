//! Expense CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_expense_list;
use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;
use crate::services::BudgetStore;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// List the expenses of a category
    List {
        /// Category name
        category: String,
    },

    /// Record an expense under a category
    Add {
        /// Category name
        category: String,
        /// Expense name
        name: String,
        /// Amount spent (e.g., "45" or "45.99")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Change an expense's name or amount
    Edit {
        /// Category name
        category: String,
        /// Current expense name
        name: String,
        /// New name
        #[arg(short = 'n', long = "name", value_name = "NEW_NAME")]
        new_name: Option<String>,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
    },

    /// Delete every expense with this name from a category
    Delete {
        /// Category name
        category: String,
        /// Expense name
        name: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &mut BudgetStore,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::List { category } => {
            let cat = store
                .category(&category)
                .ok_or_else(|| BudgetError::category_not_found(&category))?;
            print!("{}", format_expense_list(cat, symbol));
        }

        ExpenseCommands::Add {
            category,
            name,
            amount,
        } => {
            let amount = parse_amount(&amount)?;
            store.add_expense(&category, &name, amount)?;
            println!(
                "Added expense '{}' of {} to {}",
                name.trim(),
                amount.format_with_symbol(symbol),
                category
            );
        }

        ExpenseCommands::Edit {
            category,
            name,
            new_name,
            amount,
        } => {
            if new_name.is_none() && amount.is_none() {
                println!("No changes specified. Use --name or --amount.");
                return Ok(());
            }

            let current = store
                .category(&category)
                .ok_or_else(|| BudgetError::category_not_found(&category))?
                .expenses
                .iter()
                .find(|e| e.name == name)
                .map(|e| e.amount)
                .ok_or_else(|| BudgetError::expense_not_found(format!("{}/{}", category, name)))?;

            let amount = match amount {
                Some(value) => parse_amount(&value)?,
                None => current,
            };
            let new_name = new_name.unwrap_or_default();

            store.update_expense(&category, &name, &new_name, amount)?;
            println!("Updated expense in {}", category);
        }

        ExpenseCommands::Delete { category, name } => {
            let removed = store.delete_expense(&category, &name)?;
            match removed {
                0 => println!("No expense named '{}' in {}; nothing to delete.", name, category),
                1 => println!("Deleted expense '{}' from {}", name, category),
                n => println!("Deleted {} expenses named '{}' from {}", n, name, category),
            }
        }
    }

    Ok(())
}

fn parse_amount(value: &str) -> BudgetResult<Money> {
    Money::parse(value).map_err(|e| BudgetError::Validation(format!("Invalid amount: {}", e)))
}
