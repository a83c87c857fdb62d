//! CLI command handlers
//!
//! Bridges the clap argument parsing with the store. Every mutating command
//! loads the persisted state, dispatches through the store, and saves the
//! result.

use crate::error::BudgetResult;
use crate::storage::Storage;
use crate::store::BudgetStore;

pub mod budget;
pub mod category;
pub mod expense;
pub mod history;

pub use budget::{handle_reset_command, handle_set_command, handle_status_command};
pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use history::handle_history_command;

/// Save the store's state, warning on stderr if the audit log missed a change
fn save_store(storage: &Storage, store: &mut BudgetStore) -> BudgetResult<()> {
    storage.save_state(store.state())?;
    if let Some(e) = store.take_audit_failure() {
        eprintln!("Warning: audit log not written: {}", e);
    }
    Ok(())
}
