//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the budget store.

pub mod category;
pub mod expense;
pub mod income;

pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use income::{handle_income_command, IncomeCommands};
