//! Expense list view
//!
//! Renders the viewer's projection of the store

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::tui::app::App;
use crate::viewer::{ExpenseListing, ExpenseViewer};

/// Render the expense table, or the empty state
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let listing = ExpenseViewer::project(app.store.state());

    let block = Block::default()
        .title(format!(" {} ", listing.header()))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let rows = match &listing {
        ExpenseListing::Empty => {
            let text = Paragraph::new("No expenses. Press 'a' to add one.")
                .block(block)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(text, area);
            return;
        }
        ExpenseListing::Items { rows, .. } => rows,
    };

    let widths = [
        Constraint::Length(12), // Date
        Constraint::Min(20),    // Name
        Constraint::Length(15), // Category
        Constraint::Length(12), // Amount
    ];

    let header = Row::new(vec![
        Cell::from("Date").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Name").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let symbol = app.settings.currency_symbol.as_str();
    let editing = app.store.state().editing_id;
    let table_rows: Vec<Row> = rows
        .iter()
        .map(|expense| {
            let name_style = if Some(expense.id) == editing {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(expense.date.format("%Y-%m-%d").to_string()),
                Cell::from(truncate_string(&expense.name, 40)).style(name_style),
                Cell::from(expense.category.name()),
                Cell::from(expense.amount.format_with_symbol(symbol)),
            ])
        })
        .collect();

    let table = Table::new(table_rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(app.selection.index_in(&listing.ids()));

    frame.render_stateful_widget(table, area, &mut state);
}

/// Truncate a string to a maximum number of characters
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}
