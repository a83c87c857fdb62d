//! Budget CLI commands
//!
//! Defining the ceiling, the status overview, and resetting everything.

use crate::config::settings::Settings;
use crate::display::format_budget_status;
use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;
use crate::storage::Storage;
use crate::store::Intent;

/// Define the budget ceiling
pub fn handle_set_command(
    storage: &Storage,
    settings: &Settings,
    amount: &str,
) -> BudgetResult<()> {
    let budget = Money::parse(amount)
        .map_err(|e| BudgetError::Validation(format!("Invalid budget amount: {}", e)))?;

    let mut store = storage.open_store()?;
    store.dispatch(Intent::DefineBudget { budget })?;
    super::save_store(storage, &mut store)?;

    println!(
        "Budget set to {}",
        budget.format_with_symbol(&settings.currency_symbol)
    );
    let remaining = store.remaining_budget();
    if remaining.is_negative() {
        println!(
            "Warning: existing expenses already exceed it by {}",
            (-remaining).format_with_symbol(&settings.currency_symbol)
        );
    }
    Ok(())
}

pub fn handle_status_command(storage: &Storage, settings: &Settings) -> BudgetResult<()> {
    let state = storage.load_state()?;
    print!("{}", format_budget_status(&state, &settings.currency_symbol));
    Ok(())
}

/// Clear the budget and all expenses
pub fn handle_reset_command(storage: &Storage, force: bool) -> BudgetResult<()> {
    if !force {
        println!("This deletes the budget and every expense.");
        println!("Run 'budget reset --force' to confirm.");
        return Ok(());
    }

    let mut store = storage.open_store()?;
    let count = store.state().expenses.len();
    store.dispatch(Intent::ResetApp)?;
    super::save_store(storage, &mut store)?;

    println!("Budget reset ({} expenses removed)", count);
    Ok(())
}
