//! Confirmation dialog
//!
//! Simple yes/no confirmation

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::store::Intent;
use crate::tui::app::{ActiveDialog, App};
use crate::tui::layout::centered_rect_fixed;

/// Message shown for the active confirmation, if any
pub fn message(app: &App) -> Option<String> {
    match app.active_dialog {
        ActiveDialog::ConfirmDelete(id) => {
            let name = app
                .store
                .state()
                .expense(id)
                .map(|e| e.name.clone())
                .unwrap_or_else(|| id.to_string());
            Some(format!("Delete expense '{}'?", name))
        }
        ActiveDialog::ConfirmReset => Some("Delete the budget and every expense?".to_string()),
        _ => None,
    }
}

/// Render a confirmation dialog
pub fn render(frame: &mut Frame, message: &str) {
    let area = centered_rect_fixed(50, 7, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green)),
            Span::raw(" Yes  "),
            Span::styled("[N]", Style::default().fg(Color::Red)),
            Span::raw(" No  "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Handle key events for a confirmation dialog
pub fn handle_key(app: &mut App, key: crossterm::event::KeyEvent) -> bool {
    use crossterm::event::KeyCode;

    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            match app.active_dialog {
                ActiveDialog::ConfirmDelete(id) => {
                    let name = app.store.state().expense(id).map(|e| e.name.clone());
                    if app.dispatch(Intent::RemoveExpense { id }) {
                        app.set_status(format!(
                            "Deleted expense '{}'",
                            name.unwrap_or_default()
                        ));
                    }
                }
                ActiveDialog::ConfirmReset => {
                    if app.dispatch(Intent::ResetApp) {
                        app.set_status("Budget reset");
                    }
                }
                _ => {}
            }
            app.close_dialog();
            true
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.close_dialog();
            true
        }
        _ => false,
    }
}
