//! Expense entry/edit dialog
//!
//! The form in front of the expense editor. Text fields are mirrored into
//! the editor's draft as they change; Enter submits through the editor and
//! a rejected submit keeps the dialog open with the validation message.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::editor::{SubmitOutcome, DATE_INPUT_FORMAT};
use crate::models::{Category, DraftExpense, ExpenseId, CATEGORY_PLACEHOLDER};
use crate::store::Intent;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Name,
    Amount,
    Category,
    Date,
}

impl ExpenseField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Date,
            Self::Date => Self::Name,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Date,
            Self::Amount => Self::Name,
            Self::Category => Self::Amount,
            Self::Date => Self::Category,
        }
    }
}

/// Text inputs of the expense form
#[derive(Debug, Clone, Default)]
pub struct ExpenseFormState {
    pub focused_field: ExpenseField,
    pub name_input: TextInput,
    pub amount_input: TextInput,
    pub date_input: TextInput,
    /// Parse problem in the amount or date field
    pub field_error: Option<String>,
}

impl ExpenseFormState {
    /// Fill the inputs from the editor's draft
    pub fn from_draft(draft: &DraftExpense) -> Self {
        let mut state = Self {
            focused_field: ExpenseField::Name,
            name_input: TextInput::new()
                .label("Name")
                .placeholder("What was it?")
                .content(draft.name.clone()),
            amount_input: TextInput::new()
                .label("Amount")
                .placeholder("0.00")
                .content(
                    draft
                        .amount
                        .map(|a| a.to_input_string())
                        .unwrap_or_default(),
                ),
            date_input: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD")
                .content(
                    draft
                        .date
                        .map(|d| d.format(DATE_INPUT_FORMAT).to_string())
                        .unwrap_or_default(),
                ),
            field_error: None,
        };
        state.update_focus();
        state
    }

    pub fn next_field(&mut self) {
        self.set_focus(self.focused_field.next());
    }

    pub fn prev_field(&mut self) {
        self.set_focus(self.focused_field.prev());
    }

    pub fn set_focus(&mut self, field: ExpenseField) {
        self.focused_field = field;
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.name_input.focused = self.focused_field == ExpenseField::Name;
        self.amount_input.focused = self.focused_field == ExpenseField::Amount;
        self.date_input.focused = self.focused_field == ExpenseField::Date;
    }

    /// The focused text input; the category field is a selector, not text
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ExpenseField::Name => Some(&mut self.name_input),
            ExpenseField::Amount => Some(&mut self.amount_input),
            ExpenseField::Category => None,
            ExpenseField::Date => Some(&mut self.date_input),
        }
    }
}

/// Render the expense dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(60, 13, frame.area());

    frame.render_widget(Clear, area);

    let title = if app.is_editing() {
        " Edit Expense "
    } else {
        " Add Expense "
    };

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Name
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Category
            Constraint::Length(1), // Date
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Remaining
            Constraint::Length(1), // Error
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.expense_form;
    frame.render_widget(&form.name_input, chunks[1]);
    frame.render_widget(&form.amount_input, chunks[2]);
    render_category_field(frame, app, chunks[3]);
    frame.render_widget(&form.date_input, chunks[4]);

    let symbol = app.settings.currency_symbol.as_str();
    let remaining = app.store.remaining_budget();
    let remaining_line = Line::from(vec![
        Span::styled(format!("{:>10}: ", "Remaining"), Style::default().fg(Color::DarkGray)),
        Span::styled(
            remaining.format_with_symbol(symbol),
            Style::default().fg(if remaining.is_negative() {
                Color::Red
            } else {
                Color::Green
            }),
        ),
    ]);
    frame.render_widget(Paragraph::new(remaining_line), chunks[6]);

    // Submit errors take precedence over field hints
    let error = app
        .editor
        .error()
        .map(|message| message.text())
        .or_else(|| form.field_error.clone());
    if let Some(error) = error {
        let error_line = Line::from(Span::styled(error, Style::default().fg(Color::Red)));
        frame.render_widget(Paragraph::new(error_line), chunks[7]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Category  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[8]);
}

/// Render the category selector line
fn render_category_field(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.expense_form.focused_field == ExpenseField::Category;

    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let (value, value_style) = match app.editor.draft().category {
        Some(category) => (
            category.name().to_string(),
            Style::default().fg(if focused { Color::White } else { Color::Yellow }),
        ),
        None => (
            CATEGORY_PLACEHOLDER.to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let mut spans = vec![
        Span::styled(format!("{:>10}: ", "Category"), label_style),
        Span::styled(value, value_style),
    ];
    if focused {
        spans.insert(1, Span::styled("◀ ", Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(" ▶", Style::default().fg(Color::Cyan)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Handle key input for the expense dialog
/// Returns true if the key was handled, false otherwise
pub fn handle_key(app: &mut App, key: crossterm::event::KeyEvent) -> bool {
    use crossterm::event::{KeyCode, KeyModifiers};

    let on_category = app.expense_form.focused_field == ExpenseField::Category;

    match key.code {
        KeyCode::Esc => {
            cancel(app);
            return true;
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.expense_form.prev_field();
            } else {
                app.expense_form.next_field();
            }
            return true;
        }

        KeyCode::BackTab => {
            app.expense_form.prev_field();
            return true;
        }

        KeyCode::Down => {
            app.expense_form.next_field();
            return true;
        }

        KeyCode::Up => {
            app.expense_form.prev_field();
            return true;
        }

        KeyCode::Enter => {
            submit(app);
            return true;
        }

        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') if on_category => {
            let forward = key.code != KeyCode::Left;
            let next = Category::cycle(app.editor.draft().category, forward);
            app.editor.select_category(next);
            return true;
        }

        KeyCode::Backspace | KeyCode::Delete if on_category => {
            app.editor.select_category(None);
            return true;
        }

        KeyCode::Char(c) if on_category => {
            // Jump to the first category starting with the typed letter
            if let Some(category) = Category::ALL
                .into_iter()
                .find(|cat| cat.name().to_lowercase().starts_with(c.to_ascii_lowercase()))
            {
                app.editor.select_category(Some(category));
            }
            return true;
        }

        _ => {}
    }

    let Some(input) = app.expense_form.focused_input() else {
        return false;
    };

    let handled = match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.clear();
            true
        }
        KeyCode::Char(c) => {
            input.insert(c);
            true
        }
        KeyCode::Backspace => {
            input.backspace();
            true
        }
        KeyCode::Delete => {
            input.delete();
            true
        }
        KeyCode::Left => {
            input.move_left();
            return true;
        }
        KeyCode::Right => {
            input.move_right();
            return true;
        }
        KeyCode::Home => {
            input.move_start();
            return true;
        }
        KeyCode::End => {
            input.move_end();
            return true;
        }
        _ => false,
    };

    if handled {
        push_focused_field(app);
    }
    handled
}

/// Copy the focused text field into the editor's draft
fn push_focused_field(app: &mut App) {
    let form = &mut app.expense_form;
    form.field_error = match form.focused_field {
        ExpenseField::Name => {
            app.editor.set_name(form.name_input.value());
            None
        }
        ExpenseField::Amount => app
            .editor
            .set_amount(form.amount_input.value())
            .err()
            .map(|e| e.to_string()),
        ExpenseField::Date => app
            .editor
            .set_date_text(form.date_input.value())
            .err()
            .map(|_| "Use YYYY-MM-DD for the date".to_string()),
        ExpenseField::Category => None,
    };
}

fn submit(app: &mut App) {
    match app.editor.submit(&mut app.store) {
        // the editor keeps the message until it expires
        Ok(SubmitOutcome::Rejected(_)) => {}
        Ok(SubmitOutcome::Added(id)) => finish_submit(app, id, "Added"),
        Ok(SubmitOutcome::Updated(id)) => finish_submit(app, id, "Updated"),
        Err(e) => app.set_status(e.to_string()),
    }
}

fn finish_submit(app: &mut App, id: ExpenseId, verb: &str) {
    app.close_dialog();
    app.refresh_selection();
    app.selection.select(Some(id));

    let remaining = app
        .store
        .remaining_budget()
        .format_with_symbol(&app.settings.currency_symbol);
    app.set_status(format!("{} expense, {} remaining", verb, remaining));
}

fn cancel(app: &mut App) {
    app.editor.cancel();
    if app.is_editing() {
        app.dispatch(Intent::CancelEdit);
    }
    app.close_dialog();
}
