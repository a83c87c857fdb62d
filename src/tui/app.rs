//! Application state for the TUI
//!
//! The App struct owns the store, the expense editor and everything needed
//! for rendering and handling events.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use chrono::Local;

use crate::config::settings::Settings;
use crate::editor::ExpenseEditor;
use crate::error::BudgetResult;
use crate::models::ExpenseId;
use crate::storage::Storage;
use crate::store::{BudgetStore, Intent};
use crate::viewer::{ExpenseViewer, ListSelection};

use super::dialogs::budget::BudgetFormState;
use super::dialogs::expense::ExpenseFormState;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    /// The expense form; add or edit depending on the store's editing id
    ExpenseForm,
    DefineBudget,
    ConfirmDelete(ExpenseId),
    ConfirmReset,
}

/// Transient message for the status bar
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub shown_at: Instant,
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    pub store: BudgetStore,

    pub editor: ExpenseEditor,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected expense in the list
    pub selection: ListSelection,

    /// Status message to display
    pub status_message: Option<StatusMessage>,

    /// Text inputs of the expense form
    pub expense_form: ExpenseFormState,

    /// Define budget dialog state
    pub budget_form: BudgetFormState,

    /// Set by the store subscription when saved data changes
    dirty: Rc<Cell<bool>>,
}

impl<'a> App<'a> {
    /// Create a new App around a store loaded from storage
    pub fn new(storage: &'a Storage, settings: &'a Settings, mut store: BudgetStore) -> Self {
        let dirty = Rc::new(Cell::new(false));
        let flag = Rc::clone(&dirty);
        store.subscribe(move |_, change| {
            if change.is_mutation() {
                flag.set(true);
            }
        });

        let editor = ExpenseEditor::new(Local::now().date_naive())
            .with_error_display(settings.error_display());

        let mut app = Self {
            storage,
            settings,
            store,
            editor,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            selection: ListSelection::new(),
            status_message: None,
            expense_form: ExpenseFormState::default(),
            budget_form: BudgetFormState::default(),
            dirty,
        };
        app.refresh_selection();
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            shown_at: Instant::now(),
        });
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Periodic housekeeping: expire the form error and old status messages
    pub fn on_tick(&mut self, now: Instant) {
        self.editor.tick(now);

        let display_for = self.settings.error_display();
        if self
            .status_message
            .as_ref()
            .is_some_and(|m| now.duration_since(m.shown_at) >= display_for)
        {
            self.clear_status();
        }
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        match dialog {
            ActiveDialog::ExpenseForm => {
                self.editor.sync(self.store.state());
                self.expense_form = ExpenseFormState::from_draft(self.editor.draft());
            }
            ActiveDialog::DefineBudget => {
                self.budget_form = BudgetFormState::new(self.store.state().budget);
            }
            _ => {}
        }
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Whether the expense form is editing an existing expense
    pub fn is_editing(&self) -> bool {
        self.store.state().editing_id.is_some()
    }

    /// Dispatch an intent, reporting failures in the status bar
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        match self.store.dispatch(intent) {
            Ok(_) => {
                self.refresh_selection();
                true
            }
            Err(e) => {
                self.set_status(e.to_string());
                false
            }
        }
    }

    /// Row keys currently visible in the list
    pub fn visible_ids(&self) -> Vec<ExpenseId> {
        ExpenseViewer::project(self.store.state()).ids()
    }

    /// Keep the selection on a visible expense
    pub fn refresh_selection(&mut self) {
        let visible = self.visible_ids();
        self.selection.reconcile(&visible);
    }

    pub fn move_down(&mut self) {
        let visible = self.visible_ids();
        self.selection.next(&visible);
    }

    pub fn move_up(&mut self) {
        let visible = self.visible_ids();
        self.selection.previous(&visible);
    }

    /// Write the state to disk if data changed since the last save
    ///
    /// A failed audit write is shown in the status bar; the change itself
    /// is still saved.
    pub fn persist(&mut self) -> BudgetResult<()> {
        if self.dirty.replace(false) {
            self.storage.save_state(self.store.state())?;
        }
        if let Some(e) = self.store.take_audit_failure() {
            self.set_status(format!("Audit log not written: {}", e));
        }
        Ok(())
    }
}
