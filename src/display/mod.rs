//! Display formatting for terminal output
//!
//! Plain-text and table renderings of the store for the CLI.

pub mod budget;
pub mod expense;

pub use budget::format_budget_status;
pub use expense::{format_category_list, format_expense_details, format_expense_table};
