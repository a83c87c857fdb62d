//! Budget Tracker - personal expense tracking against a fixed budget
//!
//! A budget ceiling, a list of expenses, and two components working on a
//! shared store: an expense editor that validates a draft and dispatches add
//! or update intents, and an expense viewer that projects the expense list
//! through an optional category filter.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, categories, expenses and drafts
//! - `store`: Shared state, intents and subscriptions
//! - `editor`: The expense form
//! - `viewer`: The filtered expense list
//! - `storage`: JSON file storage layer
//! - `audit`: Audit logging system
//! - `cli`, `display`, `tui`: Command line and terminal interfaces
//!
//! # Example
//!
//! ```rust
//! use budget_tracker::editor::{ExpenseEditor, SubmitOutcome};
//! use budget_tracker::models::Money;
//! use budget_tracker::store::{BudgetStore, Intent};
//! use chrono::NaiveDate;
//!
//! let mut store = BudgetStore::default();
//! store.dispatch(Intent::DefineBudget { budget: Money::from_units(100) }).unwrap();
//!
//! let mut editor = ExpenseEditor::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
//! editor.set_name("Coffee");
//! editor.set_amount("5").unwrap();
//! editor.set_category("food");
//!
//! assert!(matches!(editor.submit(&mut store).unwrap(), SubmitOutcome::Added(_)));
//! assert_eq!(store.remaining_budget(), Money::from_units(95));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod editor;
pub mod error;
pub mod models;
pub mod storage;
pub mod store;
pub mod tui;
pub mod viewer;

pub use error::{BudgetError, BudgetResult};
