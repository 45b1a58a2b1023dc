//! Budget summaries
//!
//! Derived figures for display. Nothing here is stored: allocations follow
//! the income, and spending follows the expenses.

use crate::models::{Budget, Category, Money, Percentage};

/// Figures for a single category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub name: String,
    pub percentage: Percentage,
    /// `income * percentage / 100`
    pub allocated: Money,
    /// Sum of expense amounts
    pub spent: Money,
    /// `allocated - spent`, negative when overspent
    pub remaining: Money,
    /// Share of the allocation spent, clamped to [0, 100]
    pub progress: f64,
    pub expense_count: usize,
}

impl CategorySummary {
    /// Compute the summary of `category` against `income`
    pub fn for_category(category: &Category, income: Money) -> Self {
        let allocated = category.allocated(income);
        let spent = category.spent();
        Self {
            name: category.name.clone(),
            percentage: category.percentage,
            allocated,
            spent,
            remaining: allocated - spent,
            progress: progress(spent, allocated),
            expense_count: category.expenses.len(),
        }
    }

    /// Whether more was spent than allocated
    pub fn is_overspent(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Figures for the whole budget
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    pub income: Money,
    pub categories: Vec<CategorySummary>,
    pub total_percentage: Percentage,
    pub unallocated_percentage: Percentage,
    pub total_allocated: Money,
    pub total_spent: Money,
    pub total_remaining: Money,
}

impl BudgetSummary {
    /// Compute the summary of a whole budget
    pub fn for_budget(budget: &Budget) -> Self {
        let income = budget.monthly_income;
        let categories: Vec<CategorySummary> = budget
            .categories
            .iter()
            .map(|c| CategorySummary::for_category(c, income))
            .collect();

        let total_percentage = budget.total_percentage();
        let total_allocated: Money = categories.iter().map(|c| c.allocated).sum();
        let total_spent: Money = categories.iter().map(|c| c.spent).sum();

        Self {
            income,
            total_percentage,
            unallocated_percentage: Percentage::FULL - total_percentage,
            total_allocated,
            total_spent,
            total_remaining: total_allocated - total_spent,
            categories,
        }
    }
}

/// `min(spent / allocated * 100, 100)`, or 0 when nothing is allocated
pub fn progress(spent: Money, allocated: Money) -> f64 {
    if !allocated.is_positive() {
        return 0.0;
    }
    let ratio = spent.cents() as f64 / allocated.cents() as f64 * 100.0;
    ratio.clamp(0.0, 100.0)
}
