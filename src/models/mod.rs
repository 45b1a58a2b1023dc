//! Core data models for PocketBudget
//!
//! This module contains the data structures that represent the budgeting
//! domain: income, percentage-allocated categories and their expenses.

pub mod budget;
pub mod money;
pub mod percentage;

pub use budget::{Budget, Category, Expense};
pub use money::{Money, MoneyParseError};
pub use percentage::{Percentage, PercentageParseError};
