//! Budget document repository
//!
//! Loads and saves the whole budget document (income, categories, expenses)
//! as one JSON file. Loading never fails: a missing or unreadable document
//! yields an empty budget and a [`LoadStatus`] describing what happened.

use std::path::{Path, PathBuf};

use crate::error::BudgetError;
use crate::models::Budget;

use super::file_io::{read_json, write_json_atomic};

/// How the budget came to be in memory after a load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// The document was read and parsed
    Loaded,
    /// No document existed; started empty
    Missing,
    /// The document could not be read or parsed; started empty
    Recovered { reason: String },
}

impl LoadStatus {
    /// Whether the on-disk document was discarded
    pub fn is_recovered(&self) -> bool {
        matches!(self, Self::Recovered { .. })
    }
}

/// Result of loading the budget document
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub budget: Budget,
    pub status: LoadStatus,
}

/// Repository for budget document persistence
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    path: PathBuf,
}

impl BudgetRepository {
    /// Create a repository for the document at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the budget document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the budget, falling back to an empty one on any failure
    pub fn load(&self) -> LoadOutcome {
        match read_json::<Budget, _>(&self.path) {
            Ok(Some(budget)) => {
                tracing::debug!(
                    path = %self.path.display(),
                    categories = budget.categories.len(),
                    "loaded budget"
                );
                LoadOutcome {
                    budget,
                    status: LoadStatus::Loaded,
                }
            }
            Ok(None) => {
                tracing::debug!(path = %self.path.display(), "no budget file, starting empty");
                LoadOutcome {
                    budget: Budget::new(),
                    status: LoadStatus::Missing,
                }
            }
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "budget file unreadable, starting with an empty budget"
                );
                LoadOutcome {
                    budget: Budget::new(),
                    status: LoadStatus::Recovered {
                        reason: err.to_string(),
                    },
                }
            }
        }
    }

    /// Rewrite the whole document
    pub fn save(&self, budget: &Budget) -> Result<(), BudgetError> {
        write_json_atomic(&self.path, budget)
    }
}
