//! PocketBudget - percentage-based personal budget tracker
//!
//! A monthly income is split into categories, each allocated a percentage of
//! it, and expenses are recorded under each category. All data lives in one
//! JSON document that is rewritten after every change.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Money, percentages, and the budget aggregate
//! - `storage`: JSON document storage with atomic writes
//! - `services`: The budget store and derived summaries
//! - `audit`: Append-only log of every change
//! - `display`: Plain-text formatting for the terminal
//! - `cli`: Command definitions and handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use pocketbudget::models::{Money, Percentage};
//! use pocketbudget::services::BudgetStore;
//!
//! let mut store = BudgetStore::open("data.json");
//! store.set_monthly_income(Money::from_cents(3000_00))?;
//! store.add_category("Rent", Percentage::from_f64(40.0))?;
//! store.add_expense("Rent", "March", Money::from_cents(1200_00))?;
//! # Ok::<(), pocketbudget::BudgetError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
pub use services::BudgetStore;
