//! Category CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_category_details, format_category_list};
use crate::error::{BudgetError, BudgetResult};
use crate::models::Percentage;
use crate::services::{BudgetStore, BudgetSummary, CategorySummary};

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Show a category with its expenses
    Show {
        /// Category name
        name: String,
    },

    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Share of monthly income (e.g., "25" or "12.5"); defaults to the unallocated remainder
        #[arg(allow_hyphen_values = true)]
        percentage: Option<String>,
    },

    /// Rename a category or change its percentage
    Edit {
        /// Current category name
        name: String,
        /// New name
        #[arg(short = 'n', long = "name", value_name = "NEW_NAME")]
        new_name: Option<String>,
        /// New percentage
        #[arg(short, long, allow_hyphen_values = true)]
        percentage: Option<String>,
    },

    /// Delete a category and its expenses
    Delete {
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(
    store: &mut BudgetStore,
    settings: &Settings,
    cmd: CategoryCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        CategoryCommands::List => {
            let summary = BudgetSummary::for_budget(store.budget());
            print!("{}", format_category_list(&summary.categories, symbol));
        }

        CategoryCommands::Show { name } => {
            let category = store
                .category(&name)
                .ok_or_else(|| BudgetError::category_not_found(&name))?;
            let summary = CategorySummary::for_category(category, store.monthly_income());
            print!("{}", format_category_details(&summary, category, symbol));
        }

        CategoryCommands::Add { name, percentage } => {
            let percentage = match percentage {
                Some(value) => parse_percentage(&value)?,
                None => store.budget().unallocated_percentage(),
            };
            store.add_category(&name, percentage)?;
            println!("Created category: {} ({})", name.trim(), percentage);
            println!(
                "  Allocated so far: {}",
                store.budget().total_percentage()
            );
        }

        CategoryCommands::Edit {
            name,
            new_name,
            percentage,
        } => {
            let current = store
                .category(&name)
                .ok_or_else(|| BudgetError::category_not_found(&name))?;

            if new_name.is_none() && percentage.is_none() {
                println!("No changes specified. Use --name or --percentage.");
                return Ok(());
            }

            let percentage = match percentage {
                Some(value) => parse_percentage(&value)?,
                None => current.percentage,
            };
            let new_name = new_name.unwrap_or_default();

            store.update_category(&name, &new_name, percentage)?;

            let shown = if new_name.trim().is_empty() {
                name.as_str()
            } else {
                new_name.trim()
            };
            println!("Updated category: {} ({})", shown, percentage);
        }

        CategoryCommands::Delete { name } => {
            if store.delete_category(&name)? {
                println!("Deleted category: {}", name);
            } else {
                println!("No category named '{}'; nothing to delete.", name);
            }
        }
    }

    Ok(())
}

fn parse_percentage(value: &str) -> BudgetResult<Percentage> {
    Percentage::parse(value).map_err(|e| BudgetError::Validation(e.to_string()))
}
