//! Budget store
//!
//! The single source of truth for income, categories and expenses. Every
//! mutation is validated, applied in memory, then the whole document is
//! rewritten before the call returns.
//!
//! A failed save is reported as [`BudgetError::Storage`]. By then the
//! in-memory budget already holds the change, so callers must treat that
//! error as "state may not be durable".

use std::path::Path;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Budget, Category, Expense, Money, Percentage};
use crate::storage::{BudgetRepository, LoadStatus};

/// Owns the in-memory budget and its backing document
#[derive(Debug)]
pub struct BudgetStore {
    repository: BudgetRepository,
    budget: Budget,
    load_status: LoadStatus,
    audit: Option<AuditLogger>,
}

impl BudgetStore {
    /// Open the store backed by the document at `path`
    ///
    /// Never fails: a missing or corrupt document yields an empty budget.
    /// Check [`BudgetStore::load_status`] to find out which.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let repository = BudgetRepository::new(path.as_ref());
        let outcome = repository.load();
        Self {
            repository,
            budget: outcome.budget,
            load_status: outcome.status,
            audit: None,
        }
    }

    /// Record every successful mutation in `logger`
    pub fn with_audit_log(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Re-read the document from disk, discarding in-memory state
    pub fn load(&mut self) -> &LoadStatus {
        let outcome = self.repository.load();
        self.budget = outcome.budget;
        self.load_status = outcome.status;
        &self.load_status
    }

    /// How the budget was obtained by the last load
    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    /// Read-only view of the whole budget
    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    // === Income ===

    /// Set the monthly income; any value is accepted
    pub fn set_monthly_income(&mut self, value: Money) -> BudgetResult<()> {
        let before = self.budget.monthly_income;
        self.budget.monthly_income = value;
        self.persist()?;

        self.record(AuditEntry::update(
            EntityType::Income,
            "monthly income",
            &before,
            &value,
            Some(format!("{} -> {}", before, value)),
        ));
        Ok(())
    }

    /// Current monthly income (zero if never set)
    pub fn monthly_income(&self) -> Money {
        self.budget.monthly_income
    }

    // === Categories ===

    /// All categories in insertion order
    pub fn categories(&self) -> &[Category] {
        &self.budget.categories
    }

    /// Find a category by exact name
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.budget.category(name)
    }

    /// Append a new category with no expenses
    pub fn add_category(&mut self, name: &str, percentage: Percentage) -> BudgetResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BudgetError::Validation("Category name is required".into()));
        }

        check_allocation_range(percentage)?;

        if self.budget.has_category_named(name) {
            return Err(BudgetError::Validation(format!(
                "A category named '{}' already exists",
                name
            )));
        }

        let total = self.budget.total_percentage() + percentage;
        check_total(total)?;

        let category = Category::new(name, percentage);
        self.budget.categories.push(category.clone());
        self.persist()?;

        tracing::debug!(category = name, %percentage, "added category");
        self.record(AuditEntry::create(EntityType::Category, name, &category));
        Ok(())
    }

    /// Remove every category with exactly this name
    ///
    /// Unknown names are not an error. Returns whether anything was removed.
    pub fn delete_category(&mut self, name: &str) -> BudgetResult<bool> {
        let (removed, kept): (Vec<Category>, Vec<Category>) = self
            .budget
            .categories
            .drain(..)
            .partition(|c| c.name == name);
        self.budget.categories = kept;

        self.persist()?;

        for category in &removed {
            self.record(AuditEntry::delete(EntityType::Category, name, category));
        }
        Ok(!removed.is_empty())
    }

    /// Rename and/or re-percentage a category in place, keeping its expenses
    ///
    /// An empty `new_name` (after trimming) keeps the old name.
    pub fn update_category(
        &mut self,
        old_name: &str,
        new_name: &str,
        new_percentage: Percentage,
    ) -> BudgetResult<()> {
        check_allocation_range(new_percentage)?;

        let total = self.budget.total_percentage_excluding(old_name) + new_percentage;
        check_total(total)?;

        let trimmed = new_name.trim();
        let final_name = if trimmed.is_empty() { old_name } else { trimmed }.to_string();

        if self.budget.category(old_name).is_none() {
            return Err(BudgetError::category_not_found(old_name));
        }

        let collides = self
            .budget
            .categories
            .iter()
            .any(|c| c.name != old_name && c.name.trim() == final_name);
        if collides {
            return Err(BudgetError::Validation(format!(
                "A category named '{}' already exists",
                final_name
            )));
        }

        let category = self
            .budget
            .category_mut(old_name)
            .ok_or_else(|| BudgetError::category_not_found(old_name))?;
        let before = category.clone();
        category.name = final_name;
        category.percentage = new_percentage;
        let after = category.clone();

        self.persist()?;

        let mut changes = Vec::new();
        if before.name != after.name {
            changes.push(format!("name: {} -> {}", before.name, after.name));
        }
        if before.percentage != after.percentage {
            changes.push(format!(
                "percentage: {} -> {}",
                before.percentage, after.percentage
            ));
        }
        let summary = (!changes.is_empty()).then(|| changes.join(", "));
        self.record(AuditEntry::update(
            EntityType::Category,
            after.name.clone(),
            &before,
            &after,
            summary,
        ));
        Ok(())
    }

    // === Expenses ===

    /// Append an expense to a category; the amount must be positive
    pub fn add_expense(
        &mut self,
        category_name: &str,
        expense_name: &str,
        amount: Money,
    ) -> BudgetResult<()> {
        if !amount.is_positive() {
            return Err(BudgetError::Validation(
                "Expense amount must be greater than zero".into(),
            ));
        }

        let category = self
            .budget
            .category_mut(category_name)
            .ok_or_else(|| BudgetError::category_not_found(category_name))?;
        check_spent(category.expenses.iter().map(|e| e.amount).chain([amount]))?;

        let expense = Expense::new(expense_name.trim(), amount);
        category.expenses.push(expense.clone());

        self.persist()?;

        self.record(AuditEntry::create(
            EntityType::Expense,
            expense_path(category_name, &expense.name),
            &expense,
        ));
        Ok(())
    }

    /// Update the first expense named `old_expense` within a category
    ///
    /// An empty `new_name` (after trimming) keeps the old name.
    pub fn update_expense(
        &mut self,
        category_name: &str,
        old_expense: &str,
        new_name: &str,
        new_amount: Money,
    ) -> BudgetResult<()> {
        if new_amount.is_negative() {
            return Err(BudgetError::Validation(
                "Expense amount cannot be negative".into(),
            ));
        }

        let category = self
            .budget
            .category_mut(category_name)
            .ok_or_else(|| BudgetError::category_not_found(category_name))?;

        let index = category
            .expenses
            .iter()
            .position(|e| e.name == old_expense)
            .ok_or_else(|| BudgetError::expense_not_found(expense_path(category_name, old_expense)))?;
        check_spent(
            category
                .expenses
                .iter()
                .enumerate()
                .map(|(i, e)| if i == index { new_amount } else { e.amount }),
        )?;

        let expense = &mut category.expenses[index];

        let before = expense.clone();
        let trimmed = new_name.trim();
        expense.name = if trimmed.is_empty() { old_expense } else { trimmed }.to_string();
        expense.amount = new_amount;
        let after = expense.clone();

        self.persist()?;

        let mut changes = Vec::new();
        if before.name != after.name {
            changes.push(format!("name: {} -> {}", before.name, after.name));
        }
        if before.amount != after.amount {
            changes.push(format!("amount: {} -> {}", before.amount, after.amount));
        }
        let summary = (!changes.is_empty()).then(|| changes.join(", "));
        self.record(AuditEntry::update(
            EntityType::Expense,
            expense_path(category_name, &after.name),
            &before,
            &after,
            summary,
        ));
        Ok(())
    }

    /// Remove every expense named exactly `expense_name` from a category
    ///
    /// Returns how many were removed; zero is not an error.
    pub fn delete_expense(&mut self, category_name: &str, expense_name: &str) -> BudgetResult<usize> {
        let category = self
            .budget
            .category_mut(category_name)
            .ok_or_else(|| BudgetError::category_not_found(category_name))?;

        let (removed, kept): (Vec<Expense>, Vec<Expense>) = category
            .expenses
            .drain(..)
            .partition(|e| e.name == expense_name);
        category.expenses = kept;

        self.persist()?;

        let path = expense_path(category_name, expense_name);
        for expense in &removed {
            self.record(AuditEntry::delete(EntityType::Expense, path.clone(), expense));
        }
        Ok(removed.len())
    }

    // === Internals ===

    fn persist(&self) -> BudgetResult<()> {
        self.repository.save(&self.budget).map_err(|err| {
            tracing::error!(
                path = %self.repository.path().display(),
                error = %err,
                "failed to save budget; in-memory changes are not durable"
            );
            err
        })
    }

    fn record(&self, entry: AuditEntry) {
        if let Some(audit) = &self.audit {
            if let Err(err) = audit.log(&entry) {
                tracing::warn!(error = %err, "failed to write audit entry");
            }
        }
    }
}

fn check_allocation_range(percentage: Percentage) -> BudgetResult<()> {
    if percentage.is_valid_allocation() {
        Ok(())
    } else {
        Err(BudgetError::Validation(format!(
            "Percentage must be greater than 0 and at most 100 (got {})",
            percentage
        )))
    }
}

fn check_total(total: Percentage) -> BudgetResult<()> {
    if total > Percentage::FULL {
        Err(BudgetError::Validation(format!(
            "Total of all percentages ({}) exceeds 100%",
            total
        )))
    } else {
        Ok(())
    }
}

fn check_spent(amounts: impl IntoIterator<Item = Money>) -> BudgetResult<()> {
    amounts
        .into_iter()
        .try_fold(Money::zero(), Money::checked_add)
        .map(|_| ())
        .ok_or_else(|| {
            BudgetError::Validation("Total of the category's expenses is too large".into())
        })
}

fn expense_path(category: &str, expense: &str) -> String {
    format!("{}/{}", category, expense)
}
