//! Expense display formatting
//!
//! Tables for the expense list and the plain-text detail view.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Category, Expense};
use crate::viewer::EMPTY_LABEL;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format expenses as a table, or the empty-state label
pub fn format_expense_table<'a>(
    expenses: impl IntoIterator<Item = &'a Expense>,
    currency_symbol: &str,
) -> String {
    let rows: Vec<ExpenseRow> = expenses
        .into_iter()
        .map(|e| ExpenseRow {
            id: e.id.to_string(),
            date: e.date.format("%Y-%m-%d").to_string(),
            name: truncate(&e.name, 30),
            category: e.category.name(),
            amount: e.amount.format_with_symbol(currency_symbol),
        })
        .collect();

    if rows.is_empty() {
        return format!("{}.\n", EMPTY_LABEL);
    }

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::last()).with(Alignment::right()));
    format!("{}\n", table)
}

/// Format a single expense for display
pub fn format_expense_details(expense: &Expense, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:  {}\n", expense.id));
    output.push_str(&format!("UUID:     {}\n", expense.id.as_uuid()));
    output.push_str(&format!("Name:     {}\n", expense.name));
    output.push_str(&format!(
        "Amount:   {}\n",
        expense.amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Category: {} ({})\n",
        expense.category.name(),
        expense.category.id()
    ));
    output.push_str(&format!("Date:     {}\n", expense.date.format("%Y-%m-%d")));

    output
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: &'static str,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Expenses")]
    count: usize,
    #[tabled(rename = "Spent")]
    spent: String,
}

/// Format the category catalog with per-category totals
pub fn format_category_list(expenses: &[Expense], currency_symbol: &str) -> String {
    let rows = Category::ALL.iter().map(|category| {
        let matching: Vec<_> = expenses.iter().filter(|e| e.category == *category).collect();
        CategoryRow {
            id: category.id(),
            name: category.name(),
            count: matching.len(),
            spent: matching
                .iter()
                .map(|e| e.amount)
                .sum::<crate::models::Money>()
                .format_with_symbol(currency_symbol),
        }
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::last()).with(Alignment::right()));
    format!("{}\n", table)
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money};
    use chrono::NaiveDate;

    fn coffee() -> Expense {
        Expense {
            id: ExpenseId::new(),
            name: "Coffee".into(),
            amount: Money::from_cents(450),
            category: Category::Food,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_table_lists_expenses() {
        let expense = coffee();
        let output = format_expense_table([&expense], "$");
        assert!(output.contains("Coffee"));
        assert!(output.contains("$4.50"));
        assert!(output.contains("Food"));
        assert!(output.contains(&expense.id.to_string()));
    }

    #[test]
    fn test_empty_table() {
        let output = format_expense_table(std::iter::empty(), "$");
        assert_eq!(output, "No expenses.\n");
    }

    #[test]
    fn test_details() {
        let output = format_expense_details(&coffee(), "€");
        assert!(output.contains("Name:     Coffee"));
        assert!(output.contains("€4.50"));
        assert!(output.contains("Food (food)"));
    }

    #[test]
    fn test_category_list_totals() {
        let output = format_category_list(&[coffee(), coffee()], "$");
        assert!(output.contains("saving"));
        assert!(output.contains("$9.00"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long expense name", 10), "a very ...");
    }
}
