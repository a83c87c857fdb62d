//! Event handler for the TUI
//!
//! Routes keyboard events to the active dialog or the expense list, and
//! ticks to the app's housekeeping.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::Category;
use crate::store::Intent;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.on_tick(Instant::now());
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    handle_list_key(app, key);
    Ok(())
}

/// Route a key to the open dialog
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::ExpenseForm => {
            dialogs::expense::handle_key(app, key);
        }
        ActiveDialog::DefineBudget => {
            dialogs::budget::handle_key(app, key);
        }
        ActiveDialog::ConfirmDelete(_) | ActiveDialog::ConfirmReset => {
            dialogs::confirm::handle_key(app, key);
        }
        ActiveDialog::None => {}
    }
}

/// Handle keys on the main screen
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),

        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        KeyCode::Char('a') | KeyCode::Char('n') => open_add_form(app),

        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(id) = app.selection.selected() {
                if app.dispatch(Intent::EditExpense { id }) {
                    app.open_dialog(ActiveDialog::ExpenseForm);
                }
            }
        }

        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.selection.selected() {
                app.open_dialog(ActiveDialog::ConfirmDelete(id));
            }
        }

        KeyCode::Char('b') => app.open_dialog(ActiveDialog::DefineBudget),

        KeyCode::Char('f') | KeyCode::Right => cycle_filter(app, true),
        KeyCode::Char('F') | KeyCode::Left => cycle_filter(app, false),
        KeyCode::Char('c') => {
            app.dispatch(Intent::FilterCategory { category: None });
        }

        KeyCode::Char('R') => app.open_dialog(ActiveDialog::ConfirmReset),

        _ => {}
    }
}

/// Open the form for a new expense, leaving any edit in progress
fn open_add_form(app: &mut App) {
    if app.is_editing() {
        app.dispatch(Intent::CancelEdit);
    }
    app.editor.cancel();
    app.open_dialog(ActiveDialog::ExpenseForm);
}

fn cycle_filter(app: &mut App, forward: bool) {
    let category = Category::cycle(app.store.state().current_category, forward);
    app.dispatch(Intent::FilterCategory { category });
}
