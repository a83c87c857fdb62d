//! Define budget dialog
//!
//! Dialog to set the budget ceiling

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::store::Intent;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// State for the define budget dialog
#[derive(Debug, Clone, Default)]
pub struct BudgetFormState {
    /// Budget before the dialog opened
    pub current_amount: Money,
    pub amount_input: TextInput,
    pub error_message: Option<String>,
}

impl BudgetFormState {
    /// Initialize the dialog, pre-filled with the current ceiling if there is one
    pub fn new(current_amount: Money) -> Self {
        let content = if current_amount.is_zero() {
            String::new()
        } else {
            current_amount.to_input_string()
        };
        Self {
            current_amount,
            amount_input: TextInput::new()
                .label("Budget")
                .placeholder("e.g. 500.00")
                .focused(true)
                .content(content),
            error_message: None,
        }
    }

    /// Only digits and one decimal separator are accepted
    pub fn insert_char(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' || c == ',' {
            self.amount_input.insert(c);
            self.error_message = None;
        }
    }

    pub fn parse_amount(&self) -> Result<Money, String> {
        Money::parse(self.amount_input.value()).map_err(|e| e.to_string())
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the define budget dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(50, 9, frame.area());

    frame.render_widget(Clear, area);

    let state = &app.budget_form;

    let block = Block::default()
        .title(" Define Budget ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Current amount
            Constraint::Length(1), // Amount input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(inner);

    let symbol = app.settings.currency_symbol.as_str();
    let current = if state.current_amount.is_zero() {
        "(not set)".to_string()
    } else {
        state.current_amount.format_with_symbol(symbol)
    };
    let current_line = Line::from(vec![
        Span::styled(format!("{:>10}: ", "Current"), Style::default().fg(Color::Yellow)),
        Span::styled(current, Style::default().fg(Color::White)),
    ]);
    frame.render_widget(Paragraph::new(current_line), chunks[1]);

    frame.render_widget(&state.amount_input, chunks[2]);

    if let Some(ref error) = state.error_message {
        let error_line = Line::from(Span::styled(error.as_str(), Style::default().fg(Color::Red)));
        frame.render_widget(Paragraph::new(error_line), chunks[4]);
    }

    let instructions = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel  "),
        Span::styled("[Ctrl+U]", Style::default().fg(Color::Cyan)),
        Span::raw(" Clear"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[5]);
}

/// Handle key events for the define budget dialog
pub fn handle_key(app: &mut App, key: crossterm::event::KeyEvent) -> bool {
    use crossterm::event::{KeyCode, KeyModifiers};

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }

        KeyCode::Enter => {
            let budget = match app.budget_form.parse_amount() {
                Ok(budget) => budget,
                Err(e) => {
                    app.budget_form.set_error(e);
                    return true;
                }
            };
            match app.store.dispatch(Intent::DefineBudget { budget }) {
                Ok(_) => {
                    let symbol = app.settings.currency_symbol.clone();
                    app.set_status(format!(
                        "Budget set to {}",
                        budget.format_with_symbol(&symbol)
                    ));
                    app.close_dialog();
                }
                Err(e) => app.budget_form.set_error(e.to_string()),
            }
            true
        }

        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.budget_form.amount_input.clear();
            true
        }

        KeyCode::Char(c) => {
            app.budget_form.insert_char(c);
            true
        }

        KeyCode::Backspace => {
            app.budget_form.amount_input.backspace();
            app.budget_form.error_message = None;
            true
        }

        KeyCode::Left => {
            app.budget_form.amount_input.move_left();
            true
        }

        KeyCode::Right => {
            app.budget_form.amount_input.move_right();
            true
        }

        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefill_current_budget() {
        let state = BudgetFormState::new(Money::from_cents(50000));
        assert_eq!(state.amount_input.value(), "500.00");

        let state = BudgetFormState::new(Money::zero());
        assert_eq!(state.amount_input.value(), "");
    }

    #[test]
    fn test_insert_filters_characters() {
        let mut state = BudgetFormState::new(Money::zero());
        for c in "1a2.5x".chars() {
            state.insert_char(c);
        }
        assert_eq!(state.amount_input.value(), "12.5");
        assert_eq!(state.parse_amount(), Ok(Money::from_cents(1250)));
    }
}
