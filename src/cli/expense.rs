//! Expense CLI commands
//!
//! Adds and edits go through the expense editor, so the command line gets
//! the same completeness and budget checks as the form.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::editor::{ExpenseEditor, SubmitOutcome};
use crate::error::{BudgetError, BudgetResult};
use crate::models::Category;
use crate::storage::Storage;
use crate::store::Intent;
use crate::viewer::visible_expenses;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        #[arg(short, long)]
        name: String,
        /// Amount (e.g., "12" or "12.50")
        #[arg(short, long)]
        amount: String,
        /// Category id or name (e.g., "food")
        #[arg(short, long)]
        category: String,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Change an existing expense
    Edit {
        /// Expense ID (exp-xxxxxxxx, UUID, or prefix)
        id: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category id or name
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses
    List {
        /// Only show expenses in this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show expense details
    Show {
        /// Expense ID (exp-xxxxxxxx, UUID, or prefix)
        id: String,
    },

    /// Delete an expense
    Delete {
        /// Expense ID (exp-xxxxxxxx, UUID, or prefix)
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            category,
            date,
        } => {
            let mut store = storage.open_store()?;
            let mut editor = ExpenseEditor::new(chrono::Local::now().date_naive());

            editor.set_name(name);
            fill_fields(&mut editor, Some(&amount), Some(&category), date.as_deref())?;

            match editor.submit(&mut store)? {
                SubmitOutcome::Rejected(reason) => return Err(reason.into()),
                SubmitOutcome::Added(id) | SubmitOutcome::Updated(id) => {
                    super::save_store(storage, &mut store)?;
                    let expense = store.find_expense(&id.to_string())?;
                    println!("Added expense: {} ({})", expense.name, expense.id);
                    println!(
                        "  Remaining budget: {}",
                        store.remaining_budget().format_with_symbol(symbol)
                    );
                }
            }
        }

        ExpenseCommands::Edit {
            id,
            name,
            amount,
            category,
            date,
        } => {
            if name.is_none() && amount.is_none() && category.is_none() && date.is_none() {
                println!("No changes specified. Use --name, --amount, --category, or --date.");
                return Ok(());
            }

            let mut store = storage.open_store()?;
            let target = store.find_expense(&id)?.id;
            store.dispatch(Intent::EditExpense { id: target })?;

            let mut editor = ExpenseEditor::new(chrono::Local::now().date_naive());
            editor.sync(store.state());
            if let Some(name) = name {
                editor.set_name(name);
            }
            fill_fields(
                &mut editor,
                amount.as_deref(),
                category.as_deref(),
                date.as_deref(),
            )?;

            match editor.submit(&mut store)? {
                SubmitOutcome::Rejected(reason) => return Err(reason.into()),
                SubmitOutcome::Added(id) | SubmitOutcome::Updated(id) => {
                    super::save_store(storage, &mut store)?;
                    let expense = store.find_expense(&id.to_string())?;
                    println!("Updated expense: {} ({})", expense.name, expense.id);
                    println!(
                        "  Remaining budget: {}",
                        store.remaining_budget().format_with_symbol(symbol)
                    );
                }
            }
        }

        ExpenseCommands::List { category } => {
            let state = storage.load_state()?;
            let filter = category.map(|c| c.parse::<Category>()).transpose()?;
            print!(
                "{}",
                format_expense_table(visible_expenses(&state.expenses, filter), symbol)
            );
        }

        ExpenseCommands::Show { id } => {
            let state = storage.load_state()?;
            let expense = state.find_expense(&id)?;
            print!("{}", format_expense_details(expense, symbol));
        }

        ExpenseCommands::Delete { id } => {
            let mut store = storage.open_store()?;
            let expense = store.find_expense(&id)?.clone();
            store.dispatch(Intent::RemoveExpense { id: expense.id })?;
            super::save_store(storage, &mut store)?;
            println!("Deleted expense: {} ({})", expense.name, expense.id);
        }
    }

    Ok(())
}

/// Apply the optional field arguments to the editor
///
/// Bad input is reported here rather than surfacing later as an
/// incomplete form.
fn fill_fields(
    editor: &mut ExpenseEditor,
    amount: Option<&str>,
    category: Option<&str>,
    date: Option<&str>,
) -> BudgetResult<()> {
    if let Some(amount) = amount {
        editor
            .set_amount(amount)
            .map_err(|e| BudgetError::Validation(format!("Invalid amount: {}", e)))?;
    }
    if let Some(category) = category {
        editor.select_category(Some(category.parse::<Category>()?));
    }
    if let Some(date) = date {
        editor.set_date_text(date).map_err(|e| {
            BudgetError::Validation(format!("Invalid date '{}': {} (use YYYY-MM-DD)", date, e))
        })?;
    }
    Ok(())
}
