//! Budget display formatting
//!
//! Formats categories, expenses and the budget overview for terminal output.

use crate::models::{Category, Money};
use crate::services::{BudgetSummary, CategorySummary};

const BAR_WIDTH: usize = 20;

/// Format the category table (name, percentage, allocated amount)
pub fn format_category_list(summaries: &[CategorySummary], symbol: &str) -> String {
    if summaries.is_empty() {
        return "No categories found.\n\nRun 'pocketbudget category add <name> <percentage>' to create one.\n"
            .to_string();
    }

    let name_width = name_width(summaries);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>8}  {:>12}  {:>8}\n",
        "Category",
        "Share",
        "Allocated",
        "Expenses",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->8}  {:->12}  {:->8}\n",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for summary in summaries {
        output.push_str(&format!(
            "{:<width$}  {:>8}  {:>12}  {:>8}\n",
            summary.name,
            summary.percentage.to_string(),
            summary.allocated.format_with_symbol(symbol),
            summary.expense_count,
            width = name_width
        ));
    }

    output
}

/// Format one category with its figures and expenses
pub fn format_category_details(summary: &CategorySummary, category: &Category, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Category: {}\n", summary.name));
    output.push_str(&format!("  Share:      {}\n", summary.percentage));
    output.push_str(&format!(
        "  Allocated:  {}\n",
        summary.allocated.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Spent:      {}\n",
        summary.spent.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Remaining:  {}{}\n",
        summary.remaining.format_with_symbol(symbol),
        if summary.is_overspent() { " (overspent)" } else { "" }
    ));
    output.push_str(&format!(
        "  Progress:   {} {:.1}%\n",
        progress_bar(summary.progress),
        summary.progress
    ));
    output.push('\n');
    output.push_str(&format_expense_list(category, symbol));

    output
}

/// Format the expenses of a category
pub fn format_expense_list(category: &Category, symbol: &str) -> String {
    if category.expenses.is_empty() {
        return format!("No expenses recorded for '{}'.\n", category.name);
    }

    let name_width = category
        .expenses
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(7)
        .max(7);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>12}\n",
        "Expense",
        "Amount",
        width = name_width
    ));
    output.push_str(&format!("{:-<width$}  {:->12}\n", "", "", width = name_width));

    for expense in &category.expenses {
        output.push_str(&format!(
            "{:<width$}  {:>12}\n",
            expense.name,
            expense.amount.format_with_symbol(symbol),
            width = name_width
        ));
    }

    let total: Money = category.spent();
    output.push_str(&format!(
        "{:<width$}  {:>12}\n",
        "Total",
        total.format_with_symbol(symbol),
        width = name_width
    ));

    output
}

/// Format the full budget overview
pub fn format_summary(summary: &BudgetSummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Monthly income: {}\n",
        summary.income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Allocated:      {} of income ({} unallocated)\n\n",
        summary.total_percentage, summary.unallocated_percentage
    ));

    if summary.categories.is_empty() {
        output.push_str("No categories found.\n");
        return output;
    }

    let name_width = name_width(&summary.categories);

    output.push_str(&format!(
        "{:<width$}  {:>7}  {:>12}  {:>12}  {:>12}  {}\n",
        "Category",
        "Share",
        "Allocated",
        "Spent",
        "Remaining",
        "Progress",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->7}  {:->12}  {:->12}  {:->12}  {:-<bar$}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        width = name_width,
        bar = BAR_WIDTH + 8
    ));

    for category in &summary.categories {
        output.push_str(&format!(
            "{:<width$}  {:>7}  {:>12}  {:>12}  {:>12}  {} {:>5.1}%\n",
            category.name,
            category.percentage.to_string(),
            category.allocated.format_with_symbol(symbol),
            category.spent.format_with_symbol(symbol),
            category.remaining.format_with_symbol(symbol),
            progress_bar(category.progress),
            category.progress,
            width = name_width
        ));
    }

    output.push_str(&format!(
        "{:<width$}  {:>7}  {:>12}  {:>12}  {:>12}\n",
        "Total",
        summary.total_percentage.to_string(),
        summary.total_allocated.format_with_symbol(symbol),
        summary.total_spent.format_with_symbol(symbol),
        summary.total_remaining.format_with_symbol(symbol),
        width = name_width
    ));

    output
}

fn name_width(summaries: &[CategorySummary]) -> usize {
    summaries
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(8)
        .max(8)
}

fn progress_bar(progress: f64) -> String {
    let filled = ((progress / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}
