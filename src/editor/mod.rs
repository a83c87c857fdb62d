//! The expense editor
//!
//! Holds the form draft, validates it on submit and turns it into an add or
//! update intent for the store. A rejected submit shows a message that
//! clears itself after a fixed time; a newer rejection replaces the old
//! message and its deadline.

pub mod message;

pub use message::{ErrorMessage, DEFAULT_ERROR_DISPLAY};

use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};

use crate::error::{BudgetError, BudgetResult, ValidationError};
use crate::models::{Category, DraftExpense, ExpenseId, Money, MoneyParseError};
use crate::store::{BudgetState, BudgetStore, Change, Intent};

/// Date format accepted by the form's date field
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Result of a submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(ExpenseId),
    Updated(ExpenseId),
    /// Nothing was dispatched
    Rejected(ValidationError),
}

#[derive(Debug, Clone)]
pub struct ExpenseEditor {
    draft: DraftExpense,
    previous_amount: Money,
    error: Option<ErrorMessage>,
    error_display: Duration,
    /// Editing id seen on the last sync
    synced_id: Option<ExpenseId>,
}

impl ExpenseEditor {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            draft: DraftExpense::new(today),
            previous_amount: Money::zero(),
            error: None,
            error_display: DEFAULT_ERROR_DISPLAY,
            synced_id: None,
        }
    }

    pub fn with_error_display(mut self, display_for: Duration) -> Self {
        self.error_display = display_for;
        self
    }

    pub fn draft(&self) -> &DraftExpense {
        &self.draft
    }

    /// Amount of the expense being edited, zero when creating
    pub fn previous_amount(&self) -> Money {
        self.previous_amount
    }

    pub fn error(&self) -> Option<&ErrorMessage> {
        self.error.as_ref()
    }

    /// Follow the store's editing id
    ///
    /// Loads the expense into the draft when the id changes to one the store
    /// knows about.
    pub fn sync(&mut self, state: &BudgetState) {
        if state.editing_id == self.synced_id {
            return;
        }
        self.synced_id = state.editing_id;

        if let Some(expense) = state.editing_expense() {
            self.draft = DraftExpense::from_expense(expense);
            self.previous_amount = expense.amount;
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    /// Blank input clears the amount; invalid input clears it and reports why
    pub fn set_amount(&mut self, text: &str) -> Result<(), MoneyParseError> {
        if text.trim().is_empty() {
            self.draft.amount = None;
            return Ok(());
        }
        match Money::parse(text) {
            Ok(amount) => {
                self.draft.amount = Some(amount);
                Ok(())
            }
            Err(e) => {
                self.draft.amount = None;
                Err(e)
            }
        }
    }

    /// The placeholder and unknown categories leave the field unset
    pub fn set_category(&mut self, text: &str) {
        self.draft.category = Category::lookup(text);
    }

    pub fn select_category(&mut self, category: Option<Category>) {
        self.draft.category = category;
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.draft.date = date;
    }

    pub fn set_date_text(&mut self, text: &str) -> Result<(), chrono::ParseError> {
        let text = text.trim();
        if text.is_empty() {
            self.draft.date = None;
            return Ok(());
        }
        match NaiveDate::parse_from_str(text, DATE_INPUT_FORMAT) {
            Ok(date) => {
                self.draft.date = Some(date);
                Ok(())
            }
            Err(e) => {
                self.draft.date = None;
                Err(e)
            }
        }
    }

    /// Validate the draft and build the intent a submit would dispatch
    ///
    /// Completeness is checked before the budget. The budget check compares
    /// only the change in amount against what is left.
    pub fn prepare(
        &self,
        remaining_budget: Money,
        editing_id: Option<ExpenseId>,
    ) -> Result<Intent, ValidationError> {
        let expense = self.draft.complete()?;

        if expense.amount - self.previous_amount > remaining_budget {
            return Err(ValidationError::BudgetExceeded);
        }

        Ok(match editing_id {
            Some(id) => Intent::UpdateExpense {
                expense: expense.commit(id),
            },
            None => Intent::AddExpense { expense },
        })
    }

    pub fn submit(&mut self, store: &mut BudgetStore) -> BudgetResult<SubmitOutcome> {
        self.submit_at(store, Instant::now(), Local::now().date_naive())
    }

    /// Submit against the store's current state
    ///
    /// Validation failures come back as [`SubmitOutcome::Rejected`]; an error
    /// is only returned when the store fails to apply the intent. An edit
    /// open in the store that this editor never synced is closed, and the
    /// draft is added as a new expense.
    pub fn submit_at(
        &mut self,
        store: &mut BudgetStore,
        now: Instant,
        today: NaiveDate,
    ) -> BudgetResult<SubmitOutcome> {
        // Only an edit this editor has loaded may be updated
        let store_edit = store.state().editing_id;
        let editing_id = store_edit.filter(|id| self.synced_id == Some(*id));

        let intent = match self.prepare(store.remaining_budget(), editing_id) {
            Ok(intent) => intent,
            Err(error) => {
                self.error = Some(ErrorMessage::new(error, now, self.error_display));
                return Ok(SubmitOutcome::Rejected(error));
            }
        };

        if store_edit.is_some() && editing_id.is_none() {
            store.dispatch(Intent::CancelEdit)?;
        }

        let outcome = match store.dispatch(intent)? {
            Change::ExpenseUpdated(id) => SubmitOutcome::Updated(id),
            Change::ExpenseAdded(id) => SubmitOutcome::Added(id),
            other => {
                return Err(BudgetError::Storage(format!(
                    "Unexpected store change for a submit: {:?}",
                    other
                )))
            }
        };

        self.reset(today);
        self.error = None;
        self.synced_id = store.state().editing_id;
        Ok(outcome)
    }

    /// Clear an expired message; returns true if one was cleared
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.error {
            Some(message) if message.is_expired(now) => {
                self.error = None;
                true
            }
            _ => false,
        }
    }

    /// Drop the draft without dispatching anything
    ///
    /// The next sync reloads whatever the store is editing.
    pub fn cancel(&mut self) {
        self.reset(Local::now().date_naive());
        self.synced_id = None;
    }

    fn reset(&mut self, today: NaiveDate) {
        self.draft = DraftExpense::new(today);
        self.previous_amount = Money::zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewExpense;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_with_budget(units: i64) -> BudgetStore {
        let mut store = BudgetStore::default();
        store
            .dispatch(Intent::DefineBudget {
                budget: Money::from_units(units),
            })
            .unwrap();
        store
    }

    fn add(store: &mut BudgetStore, name: &str, units: i64) -> ExpenseId {
        match store
            .dispatch(Intent::AddExpense {
                expense: NewExpense {
                    name: name.into(),
                    amount: Money::from_units(units),
                    category: Category::Food,
                    date: date(2024, 1, 1),
                },
            })
            .unwrap()
        {
            Change::ExpenseAdded(id) => id,
            other => panic!("unexpected change {:?}", other),
        }
    }

    fn fill_coffee(editor: &mut ExpenseEditor) {
        editor.set_name("Coffee");
        editor.set_amount("5").unwrap();
        editor.set_category("food");
        editor.set_date_text("2024-01-01").unwrap();
    }

    #[test]
    fn test_coffee_is_added_and_draft_resets() {
        let today = date(2024, 6, 1);
        let mut store = store_with_budget(100);
        let mut editor = ExpenseEditor::new(today);
        fill_coffee(&mut editor);

        let outcome = editor
            .submit_at(&mut store, Instant::now(), today)
            .unwrap();

        let id = match outcome {
            SubmitOutcome::Added(id) => id,
            other => panic!("unexpected outcome {:?}", other),
        };
        let expense = store.state().expense(id).unwrap();
        assert_eq!(expense.name, "Coffee");
        assert_eq!(expense.amount, Money::from_units(5));
        assert_eq!(expense.category, Category::Food);
        assert_eq!(expense.date, date(2024, 1, 1));

        assert_eq!(editor.draft(), &DraftExpense::new(today));
        assert_eq!(editor.previous_amount(), Money::zero());
        assert!(editor.error().is_none());
    }

    #[test]
    fn test_incomplete_draft_is_rejected_without_dispatch() {
        let today = date(2024, 6, 1);
        let mut store = store_with_budget(100);
        let mut editor = ExpenseEditor::new(today);
        editor.set_name("Coffee");
        editor.set_category(crate::models::CATEGORY_PLACEHOLDER);

        let outcome = editor
            .submit_at(&mut store, Instant::now(), today)
            .unwrap();

        assert_eq!(outcome, SubmitOutcome::Rejected(ValidationError::Incomplete));
        assert!(store.state().expenses.is_empty());
        assert_eq!(editor.error().unwrap().text(), "All fields are required");
        assert_eq!(editor.draft().name, "Coffee");
    }

    #[test]
    fn test_completeness_checked_before_budget() {
        let editor = ExpenseEditor::new(date(2024, 6, 1));
        // Amount zero but no category: fails completeness even with no budget left
        assert_eq!(
            editor.prepare(Money::from_units(-10), None),
            Err(ValidationError::Incomplete)
        );
    }

    #[test]
    fn test_new_expense_over_budget_is_rejected() {
        let today = date(2024, 6, 1);
        let mut store = store_with_budget(4);
        let mut editor = ExpenseEditor::new(today);
        fill_coffee(&mut editor);

        let outcome = editor
            .submit_at(&mut store, Instant::now(), today)
            .unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(ValidationError::BudgetExceeded)
        );
        assert!(store.state().expenses.is_empty());
    }

    #[test]
    fn test_amount_equal_to_remaining_is_accepted() {
        let editor = {
            let mut e = ExpenseEditor::new(date(2024, 6, 1));
            fill_coffee(&mut e);
            e
        };
        assert!(matches!(
            editor.prepare(Money::from_units(5), None),
            Ok(Intent::AddExpense { .. })
        ));
    }

    #[test]
    fn test_edit_checks_only_the_increase() {
        let today = date(2024, 6, 1);
        // budget 80, e1 = 50 spent, 30 left
        let mut store = store_with_budget(80);
        let e1 = add(&mut store, "Groceries", 50);
        store.dispatch(Intent::EditExpense { id: e1 }).unwrap();

        let mut editor = ExpenseEditor::new(today);
        editor.sync(store.state());
        assert_eq!(editor.previous_amount(), Money::from_units(50));
        assert_eq!(editor.draft().name, "Groceries");

        editor.set_amount("200").unwrap();
        let outcome = editor
            .submit_at(&mut store, Instant::now(), today)
            .unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(ValidationError::BudgetExceeded)
        );
        assert_eq!(store.state().expense(e1).unwrap().amount, Money::from_units(50));
        assert_eq!(store.state().editing_id, Some(e1));

        editor.set_amount("80").unwrap();
        let outcome = editor
            .submit_at(&mut store, Instant::now(), today)
            .unwrap();
        assert_eq!(outcome, SubmitOutcome::Updated(e1));
        assert_eq!(store.state().expense(e1).unwrap().amount, Money::from_units(80));
        assert_eq!(store.state().expenses.len(), 1);
        assert_eq!(store.state().editing_id, None);
        assert_eq!(editor.draft(), &DraftExpense::new(today));
    }

    #[test]
    fn test_lowering_an_expense_is_always_allowed() {
        let mut store = store_with_budget(50);
        let e1 = add(&mut store, "Groceries", 60);
        store.dispatch(Intent::EditExpense { id: e1 }).unwrap();

        let mut editor = ExpenseEditor::new(date(2024, 6, 1));
        editor.sync(store.state());
        editor.set_amount("55").unwrap();
        assert!(matches!(
            editor.prepare(store.remaining_budget(), Some(e1)),
            Ok(Intent::UpdateExpense { .. })
        ));
    }

    #[test]
    fn test_sync_ignores_unknown_id_and_repeats() {
        let today = date(2024, 6, 1);
        let mut editor = ExpenseEditor::new(today);
        editor.set_name("typed");

        let state = BudgetState {
            editing_id: Some(ExpenseId::new()),
            ..Default::default()
        };
        editor.sync(&state);
        assert_eq!(editor.draft().name, "typed");

        let mut store = store_with_budget(100);
        let id = add(&mut store, "Rent", 10);
        store.dispatch(Intent::EditExpense { id }).unwrap();
        editor.sync(store.state());
        assert_eq!(editor.draft().name, "Rent");

        // same id again: local edits survive
        editor.set_name("Rent (March)");
        editor.sync(store.state());
        assert_eq!(editor.draft().name, "Rent (March)");
    }

    #[test]
    fn test_field_setters() {
        let mut editor = ExpenseEditor::new(date(2024, 6, 1));

        assert!(editor.set_amount("abc").is_err());
        assert_eq!(editor.draft().amount, None);
        assert!(editor.set_amount("-3").is_err());
        assert_eq!(editor.draft().amount, None);
        editor.set_amount("12.5").unwrap();
        assert_eq!(editor.draft().amount, Some(Money::from_cents(1250)));
        editor.set_amount("").unwrap();
        assert_eq!(editor.draft().amount, None);

        editor.set_category("Health");
        assert_eq!(editor.draft().category, Some(Category::Health));
        editor.set_category("travel");
        assert_eq!(editor.draft().category, None);

        assert!(editor.set_date_text("2024-13-40").is_err());
        assert_eq!(editor.draft().date, None);
    }

    #[test]
    fn test_error_clears_after_display_time() {
        let today = date(2024, 6, 1);
        let mut store = store_with_budget(100);
        let mut editor = ExpenseEditor::new(today);
        let shown = Instant::now();

        editor.submit_at(&mut store, shown, today).unwrap();
        assert!(editor.error().is_some());

        assert!(!editor.tick(shown + Duration::from_secs(4)));
        assert!(editor.error().is_some());
        assert!(editor.tick(shown + Duration::from_secs(5)));
        assert!(editor.error().is_none());
    }

    #[test]
    fn test_newer_error_cancels_pending_clear() {
        let today = date(2024, 6, 1);
        let mut store = store_with_budget(1);
        let mut editor = ExpenseEditor::new(today);
        let first = Instant::now();

        editor.submit_at(&mut store, first, today).unwrap();

        fill_coffee(&mut editor);
        let second = first + Duration::from_secs(3);
        editor.submit_at(&mut store, second, today).unwrap();

        // first deadline has passed but the newer message stays
        assert!(!editor.tick(first + Duration::from_secs(6)));
        let message = editor.error().unwrap();
        assert_eq!(message.error(), ValidationError::BudgetExceeded);
        assert!(editor.tick(second + Duration::from_secs(5)));
    }

    #[test]
    fn test_configured_display_time() {
        let today = date(2024, 6, 1);
        let mut store = store_with_budget(100);
        let mut editor = ExpenseEditor::new(today).with_error_display(Duration::from_secs(1));
        let shown = Instant::now();

        editor.submit_at(&mut store, shown, today).unwrap();
        assert!(editor.tick(shown + Duration::from_secs(1)));
    }

    #[test]
    fn test_cancel_resets_without_dispatch() {
        let mut store = store_with_budget(100);
        let id = add(&mut store, "Rent", 10);
        store.dispatch(Intent::EditExpense { id }).unwrap();

        let mut editor = ExpenseEditor::new(date(2024, 6, 1));
        editor.sync(store.state());
        editor.cancel();

        assert_eq!(editor.draft().name, "");
        assert_eq!(editor.previous_amount(), Money::zero());
        assert_eq!(store.state().expense(id).unwrap().amount, Money::from_units(10));

        // reopening the same expense loads it again
        editor.sync(store.state());
        assert_eq!(editor.draft().name, "Rent");
        assert_eq!(editor.previous_amount(), Money::from_units(10));
    }

    #[test]
    fn test_unsynced_edit_is_not_overwritten() {
        let today = date(2024, 6, 1);
        let mut store = store_with_budget(100);
        let coffee = add(&mut store, "Coffee", 5);
        store.dispatch(Intent::EditExpense { id: coffee }).unwrap();

        // a fresh editor that never loaded the edit
        let mut editor = ExpenseEditor::new(today);
        editor.set_name("Taxi");
        editor.set_amount("12").unwrap();
        editor.set_category("leisure");

        let outcome = editor
            .submit_at(&mut store, Instant::now(), today)
            .unwrap();

        assert!(matches!(outcome, SubmitOutcome::Added(id) if id != coffee));
        let names: Vec<_> = store.state().expenses.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Coffee", "Taxi"]);
        assert_eq!(store.state().editing_id, None);
        assert_eq!(store.remaining_budget(), Money::from_units(83));
    }

    #[test]
    fn test_failed_audit_write_still_resets_draft() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let today = date(2024, 6, 1);
        let mut store = store_with_budget(100)
            .with_audit(crate::audit::AuditLogger::new(temp_dir.path().to_path_buf()));
        let mut editor = ExpenseEditor::new(today);
        fill_coffee(&mut editor);

        let first = editor
            .submit_at(&mut store, Instant::now(), today)
            .unwrap();
        assert!(matches!(first, SubmitOutcome::Added(_)));
        assert_eq!(editor.draft(), &DraftExpense::new(today));
        assert!(store.take_audit_failure().is_some());

        // submitting again does not commit a second copy
        let second = editor
            .submit_at(&mut store, Instant::now(), today)
            .unwrap();
        assert_eq!(second, SubmitOutcome::Rejected(ValidationError::Incomplete));
        assert_eq!(store.state().expenses.len(), 1);
    }
}
