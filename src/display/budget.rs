//! Budget summary formatting

use crate::models::Money;
use crate::store::BudgetState;

/// Format the budget overview: ceiling, spent, remaining, and a text bar
pub fn format_budget_status(state: &BudgetState, currency_symbol: &str) -> String {
    if !state.is_budget_defined() {
        return "No budget defined.\n\nRun 'budget set <amount>' to define one.\n".to_string();
    }

    let fmt = |m: Money| m.format_with_symbol(currency_symbol);
    let remaining = state.remaining_budget();
    let percentage = state.spent_percentage();

    let mut output = String::new();
    output.push_str(&format!("Budget:    {:>12}\n", fmt(state.budget)));
    output.push_str(&format!("Spent:     {:>12}\n", fmt(state.total_spent())));
    output.push_str(&format!("Remaining: {:>12}\n", fmt(remaining)));
    output.push_str(&format!("{} {:.0}%\n", progress_bar(percentage, 30), percentage));

    if remaining.is_negative() {
        output.push_str(&format!("Over budget by {}\n", fmt(-remaining)));
    }

    output
}

fn progress_bar(percentage: f64, width: usize) -> String {
    let filled = ((percentage / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
