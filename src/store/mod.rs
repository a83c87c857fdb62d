//! The shared store
//!
//! `BudgetStore` owns the [`BudgetState`] and is the only place it changes.
//! Intents are applied synchronously; listeners registered with
//! [`BudgetStore::subscribe`] run after every applied intent, and committed
//! mutations are recorded in the audit log when one is attached.

pub mod intent;
pub mod state;

pub use intent::{Change, Intent};
pub use state::BudgetState;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Expense, ExpenseId, Money};

/// Handle returned by [`BudgetStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&BudgetState, &Change)>;

pub struct BudgetStore {
    state: BudgetState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    audit: Option<AuditLogger>,
    /// Last audit write that failed, until someone takes it
    audit_failure: Option<BudgetError>,
}

impl BudgetStore {
    pub fn new(state: BudgetState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_subscription: 0,
            audit: None,
            audit_failure: None,
        }
    }

    /// Record committed mutations to the given log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    pub fn remaining_budget(&self) -> Money {
        self.state.remaining_budget()
    }

    pub fn total_spent(&self) -> Money {
        self.state.total_spent()
    }

    pub fn spent_percentage(&self) -> f64 {
        self.state.spent_percentage()
    }

    pub fn find_expense(&self, reference: &str) -> BudgetResult<&Expense> {
        self.state.find_expense(reference)
    }

    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&BudgetState, &Change) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the subscription was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Apply an intent
    ///
    /// The state is left untouched when an intent is rejected. Once an intent
    /// is applied the change stands: listeners are notified and the call
    /// succeeds even if the audit entry cannot be written. Such failures are
    /// kept for [`BudgetStore::take_audit_failure`].
    pub fn dispatch(&mut self, intent: Intent) -> BudgetResult<Change> {
        let (change, entry) = self.apply(intent)?;

        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state, &change);
        }

        if let (Some(logger), Some(entry)) = (&self.audit, entry) {
            if let Err(e) = logger.log(&entry) {
                self.audit_failure = Some(e);
            }
        }

        Ok(change)
    }

    /// The most recent audit write failure, if any, clearing it
    pub fn take_audit_failure(&mut self) -> Option<BudgetError> {
        self.audit_failure.take()
    }

    fn apply(&mut self, intent: Intent) -> BudgetResult<(Change, Option<AuditEntry>)> {
        let state = &mut self.state;

        match intent {
            Intent::DefineBudget { budget } => {
                if !budget.is_positive() {
                    return Err(BudgetError::Validation(format!(
                        "Budget must be greater than zero, got {}",
                        budget
                    )));
                }
                let previous = state.budget;
                state.budget = budget;
                let entry = AuditEntry::update(
                    EntityType::Budget,
                    "budget",
                    None,
                    &previous,
                    &budget,
                );
                Ok((Change::BudgetDefined(budget), Some(entry)))
            }

            Intent::AddExpense { expense } => {
                let expense = expense.commit(ExpenseId::new());
                let id = expense.id;
                let entry = AuditEntry::create(
                    EntityType::Expense,
                    id.to_string(),
                    Some(expense.name.clone()),
                    &expense,
                );
                state.expenses.push(expense);
                state.editing_id = None;
                Ok((Change::ExpenseAdded(id), Some(entry)))
            }

            Intent::RemoveExpense { id } => {
                let index = state.position(id)?;
                let removed = state.expenses.remove(index);
                if state.editing_id == Some(id) {
                    state.editing_id = None;
                }
                let entry = AuditEntry::delete(
                    EntityType::Expense,
                    id.to_string(),
                    Some(removed.name.clone()),
                    &removed,
                );
                Ok((Change::ExpenseRemoved(id), Some(entry)))
            }

            Intent::EditExpense { id } => {
                state.position(id)?;
                state.editing_id = Some(id);
                Ok((Change::EditStarted(id), None))
            }

            Intent::UpdateExpense { expense } => {
                let id = expense.id;
                let index = state.position(id)?;
                let slot = &mut state.expenses[index];
                let before = slot.clone();
                slot.apply(expense.details());
                let entry = AuditEntry::update(
                    EntityType::Expense,
                    id.to_string(),
                    Some(slot.name.clone()),
                    &before,
                    &*slot,
                );
                state.editing_id = None;
                Ok((Change::ExpenseUpdated(id), Some(entry)))
            }

            Intent::CancelEdit => {
                state.editing_id = None;
                Ok((Change::EditCancelled, None))
            }

            Intent::FilterCategory { category } => {
                state.current_category = category;
                Ok((Change::FilterChanged(category), None))
            }

            Intent::ResetApp => {
                let previous = std::mem::take(state);
                let entry = AuditEntry::delete(
                    EntityType::Budget,
                    "budget",
                    Some(format!("{} expenses", previous.expenses.len())),
                    &previous,
                );
                Ok((Change::Reset, Some(entry)))
            }
        }
    }
}

impl Default for BudgetStore {
    fn default() -> Self {
        Self::new(BudgetState::default())
    }
}

impl std::fmt::Debug for BudgetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BudgetStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
