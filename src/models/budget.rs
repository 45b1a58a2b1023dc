//! Budget, Category and Expense models
//!
//! The budget is the root aggregate: a monthly income and an ordered list of
//! categories, each allocated a percentage of that income and holding its own
//! expenses. Field names match the on-disk document.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::percentage::Percentage;

/// Root aggregate persisted as the budget document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Monthly income the percentages are taken from
    #[serde(default)]
    pub monthly_income: Money,

    /// Categories in insertion order
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Budget {
    /// Create an empty budget (no income, no categories)
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the budget holds no data at all
    pub fn is_empty(&self) -> bool {
        self.monthly_income.is_zero() && self.categories.is_empty()
    }

    /// Sum of all category percentages
    pub fn total_percentage(&self) -> Percentage {
        self.categories.iter().map(|c| c.percentage).sum()
    }

    /// Sum of all category percentages except those named `excluded`
    pub fn total_percentage_excluding(&self, excluded: &str) -> Percentage {
        self.categories
            .iter()
            .filter(|c| c.name != excluded)
            .map(|c| c.percentage)
            .sum()
    }

    /// What is left to allocate: `max(100 - total, 0)`
    pub fn unallocated_percentage(&self) -> Percentage {
        (Percentage::FULL - self.total_percentage()).max(Percentage::zero())
    }

    /// Find a category by exact name
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Find a category by exact name for modification
    pub fn category_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.name == name)
    }

    /// Check whether a category with this trimmed name exists
    pub fn has_category_named(&self, trimmed_name: &str) -> bool {
        self.categories.iter().any(|c| c.name.trim() == trimmed_name)
    }
}

/// A named bucket allocated a fixed percentage of monthly income
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique, trimmed name
    pub name: String,

    /// Share of monthly income, in (0, 100]
    pub percentage: Percentage,

    /// Expenses recorded against this category
    #[serde(rename = "sub", default)]
    pub expenses: Vec<Expense>,
}

impl Category {
    /// Create a new category with no expenses
    pub fn new(name: impl Into<String>, percentage: Percentage) -> Self {
        Self {
            name: name.into(),
            percentage,
            expenses: Vec::new(),
        }
    }

    /// Income allocated to this category: `income * percentage / 100`, rounded to the cent
    pub fn allocated(&self, income: Money) -> Money {
        let product = i128::from(income.cents()) * i128::from(self.percentage.hundredths());
        let divisor = i128::from(Percentage::FULL.hundredths());
        let half = divisor / 2;
        let rounded = if product >= 0 {
            (product + half) / divisor
        } else {
            (product - half) / divisor
        };
        let cents = i64::try_from(rounded)
            .unwrap_or(if rounded > 0 { i64::MAX } else { i64::MIN });
        Money::from_cents(cents)
    }

    /// Sum of all expense amounts
    pub fn spent(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.percentage)
    }
}

/// A named monetary entry under a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Expense name (not required to be unique)
    pub name: String,

    /// Amount spent
    pub amount: Money,
}

impl Expense {
    /// Create a new expense
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}
