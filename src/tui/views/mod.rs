//! TUI Views module
//!
//! The budget summary, the expense list and the status bar.

pub mod expense_list;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    summary::render(frame, app, layout.summary);
    expense_list::render(frame, app, layout.main);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::ExpenseForm => dialogs::expense::render(frame, app),
        ActiveDialog::DefineBudget => dialogs::budget::render(frame, app),
        ActiveDialog::ConfirmDelete(_) | ActiveDialog::ConfirmReset => {
            if let Some(message) = dialogs::confirm::message(app) {
                dialogs::confirm::render(frame, &message);
            }
        }
        ActiveDialog::None => {}
    }
}
