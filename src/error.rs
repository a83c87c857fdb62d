//! Error types for the budget tracker
//!
//! `ValidationError` covers the two user-facing form failures; `BudgetError`
//! is the crate-wide error for everything else.

use thiserror::Error;

/// Reasons the expense form refuses to submit
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Name, amount, category or date is missing
    #[error("All fields are required")]
    Incomplete,

    /// The new amount would take spending past the budget ceiling
    #[error("Budget exceeded")]
    BudgetExceeded,
}

/// The main error type for budget tracker operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid input that never reached the form (CLI arguments, budget amounts)
    #[error("Validation error: {0}")]
    Validation(String),

    /// The expense form rejected a submit
    #[error("Expense rejected: {0}")]
    Rejected(#[from] ValidationError),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BudgetError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Rejected(_))
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget tracker operations
pub type BudgetResult<T> = Result<T, BudgetError>;
