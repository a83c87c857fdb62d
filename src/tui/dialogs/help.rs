//! Help dialog
//!
//! Lists the keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        section("Global Keys"),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("b", "Define the budget"),
        key_line("R", "Reset budget and expenses"),
        Line::from(""),
        section("Expense List"),
        Line::from(""),
        key_line("j/k", "Move selection down/up"),
        key_line("a/n", "Add expense"),
        key_line("e/Enter", "Edit selected expense"),
        key_line("d/Del", "Delete selected expense"),
        key_line("f/F", "Next/previous category filter"),
        key_line("c", "Clear category filter"),
        Line::from(""),
        section("Expense Form"),
        Line::from(""),
        key_line("Tab/↓", "Next field"),
        key_line("S-Tab/↑", "Previous field"),
        key_line("←/→", "Change category"),
        key_line("Enter", "Save"),
        key_line("Esc", "Cancel"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ]
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
