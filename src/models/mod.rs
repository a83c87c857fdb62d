//! Core data models for the budget tracker

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{Category, CATEGORY_PLACEHOLDER};
pub use expense::{DraftExpense, Expense, NewExpense};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
