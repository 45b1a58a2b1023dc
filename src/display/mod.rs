//! Display formatting for terminal output
//!
//! Provides utilities for formatting budget data and audit history as
//! plain-text tables.

pub mod budget;
pub mod history;

pub use budget::{format_category_details, format_category_list, format_expense_list, format_summary};
pub use history::format_history;
