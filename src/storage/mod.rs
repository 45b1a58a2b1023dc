//! Storage layer for PocketBudget
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The whole budget is one document, rewritten on every change.

pub mod budget;
pub mod file_io;

pub use budget::{BudgetRepository, LoadOutcome, LoadStatus};
pub use file_io::{read_json, write_json_atomic};
