//! Intents dispatched to the store and the changes they produce

use crate::models::{Category, Expense, ExpenseId, Money, NewExpense};

/// A requested state mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Set the budget ceiling
    DefineBudget { budget: Money },
    /// Commit a new expense; the store assigns its identifier
    AddExpense { expense: NewExpense },
    RemoveExpense { id: ExpenseId },
    /// Open an existing expense in the editor
    EditExpense { id: ExpenseId },
    /// Replace an existing expense's fields
    UpdateExpense { expense: Expense },
    CancelEdit,
    FilterCategory { category: Option<Category> },
    /// Clear the budget and every expense
    ResetApp,
}

/// What an applied intent changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    BudgetDefined(Money),
    ExpenseAdded(ExpenseId),
    ExpenseRemoved(ExpenseId),
    EditStarted(ExpenseId),
    ExpenseUpdated(ExpenseId),
    EditCancelled,
    FilterChanged(Option<Category>),
    Reset,
}

impl Change {
    /// Whether the change touched persisted data rather than view state only
    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            Change::EditStarted(_) | Change::EditCancelled | Change::FilterChanged(_)
        )
    }
}
