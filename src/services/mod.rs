//! Service layer for PocketBudget
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, persistence on every change, and computed figures.

pub mod budget;
pub mod summary;

pub use budget::BudgetStore;
pub use summary::{BudgetSummary, CategorySummary};
