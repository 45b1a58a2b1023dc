//! Custom error types for PocketBudget
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for PocketBudget operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Caller-supplied data violates a business rule
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referenced category or expense does not exist
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Persisting the budget document failed
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BudgetError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if the in-memory change may not have reached disk
    pub fn is_persistence_failure(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

/// Result type alias for PocketBudget operations
pub type BudgetResult<T> = Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BudgetError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = BudgetError::category_not_found("Rent");
        assert_eq!(err.to_string(), "Category not found: Rent");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_expense_not_found_error() {
        let err = BudgetError::expense_not_found("Groceries");
        assert_eq!(err.to_string(), "Expense not found: Groceries");
    }

    #[test]
    fn test_storage_is_persistence_failure() {
        let err = BudgetError::Storage("disk full".into());
        assert!(err.is_persistence_failure());
        assert!(!BudgetError::Validation("x".into()).is_persistence_failure());
    }
}
