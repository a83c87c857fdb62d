//! The store's state: budget ceiling, committed expenses and view state

use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Category, Expense, ExpenseId, Money};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetState {
    /// Budget ceiling; zero until one is defined
    #[serde(default)]
    pub budget: Money,

    /// Committed expenses in insertion order
    #[serde(default)]
    pub expenses: Vec<Expense>,

    /// Expense currently open in the editor, if any; never saved
    #[serde(skip)]
    pub editing_id: Option<ExpenseId>,

    /// Category filter applied by the list view; never saved
    #[serde(skip)]
    pub current_category: Option<Category>,
}

impl BudgetState {
    pub fn is_budget_defined(&self) -> bool {
        self.budget.is_positive()
    }

    pub fn total_spent(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Budget minus everything committed, including an expense being edited
    ///
    /// May be negative if the ceiling was lowered below what is already spent.
    pub fn remaining_budget(&self) -> Money {
        self.budget - self.total_spent()
    }

    /// Share of the budget already spent, as a percentage clamped to 0..=100
    pub fn spent_percentage(&self) -> f64 {
        if !self.budget.is_positive() {
            return 0.0;
        }
        let ratio = self.total_spent().cents() as f64 / self.budget.cents() as f64;
        (ratio * 100.0).clamp(0.0, 100.0)
    }

    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn editing_expense(&self) -> Option<&Expense> {
        self.editing_id.and_then(|id| self.expense(id))
    }

    /// Resolve a user-supplied reference (full UUID, `exp-` id, or prefix)
    pub fn find_expense(&self, reference: &str) -> BudgetResult<&Expense> {
        let mut matches = self
            .expenses
            .iter()
            .filter(|e| e.id.matches_reference(reference));

        match (matches.next(), matches.next()) {
            (Some(expense), None) => Ok(expense),
            (None, _) => Err(BudgetError::expense_not_found(reference)),
            (Some(_), Some(_)) => Err(BudgetError::Validation(format!(
                "Expense reference '{}' is ambiguous",
                reference
            ))),
        }
    }

    pub(crate) fn position(&self, id: ExpenseId) -> BudgetResult<usize> {
        self.expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| BudgetError::expense_not_found(id.to_string()))
    }
}
