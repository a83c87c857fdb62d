//! The expense viewer
//!
//! A read-only projection of the store: the expense collection narrowed by
//! the active category filter, or an empty-state marker.

use crate::models::{Category, Expense, ExpenseId};
use crate::store::BudgetState;

/// Shown in place of the list when nothing matches
pub const EMPTY_LABEL: &str = "No expenses";

/// Expenses in the given category, in collection order; all of them without a filter
pub fn visible_expenses<'a>(
    expenses: &'a [Expense],
    filter: Option<Category>,
) -> impl Iterator<Item = &'a Expense> + 'a {
    expenses
        .iter()
        .filter(move |e| filter.map_or(true, |category| e.category == category))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseListing<'a> {
    Empty,
    Items {
        header: String,
        rows: Vec<&'a Expense>,
    },
}

impl<'a> ExpenseListing<'a> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn rows(&self) -> &[&'a Expense] {
        match self {
            Self::Empty => &[],
            Self::Items { rows, .. } => rows,
        }
    }

    /// Row keys in display order
    pub fn ids(&self) -> Vec<ExpenseId> {
        self.rows().iter().map(|e| e.id).collect()
    }

    pub fn header(&self) -> &str {
        match self {
            Self::Empty => EMPTY_LABEL,
            Self::Items { header, .. } => header,
        }
    }
}

pub struct ExpenseViewer;

impl ExpenseViewer {
    pub fn project(state: &BudgetState) -> ExpenseListing<'_> {
        let filter = state.current_category;
        let rows: Vec<_> = visible_expenses(&state.expenses, filter).collect();

        if rows.is_empty() {
            return ExpenseListing::Empty;
        }

        let header = match filter {
            Some(category) => format!("Expenses: {}", category),
            None => "Expenses".to_string(),
        };
        ExpenseListing::Items { header, rows }
    }
}

/// Selection in the list, tracked by expense rather than by row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListSelection {
    selected: Option<ExpenseId>,
}

impl ListSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<ExpenseId> {
        self.selected
    }

    pub fn select(&mut self, id: Option<ExpenseId>) {
        self.selected = id;
    }

    /// Keep the selection on a visible row, falling back to the first one
    pub fn reconcile(&mut self, visible: &[ExpenseId]) {
        let still_visible = self.selected.is_some_and(|id| visible.contains(&id));
        if !still_visible {
            self.selected = visible.first().copied();
        }
    }

    /// Row index of the selection within `visible`
    pub fn index_in(&self, visible: &[ExpenseId]) -> Option<usize> {
        self.selected
            .and_then(|id| visible.iter().position(|v| *v == id))
    }

    pub fn next(&mut self, visible: &[ExpenseId]) {
        self.step(visible, true);
    }

    pub fn previous(&mut self, visible: &[ExpenseId]) {
        self.step(visible, false);
    }

    fn step(&mut self, visible: &[ExpenseId], forward: bool) {
        if visible.is_empty() {
            self.selected = None;
            return;
        }
        let index = match self.index_in(visible) {
            Some(i) if forward => (i + 1).min(visible.len() - 1),
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.selected = Some(visible[index]);
    }
}
