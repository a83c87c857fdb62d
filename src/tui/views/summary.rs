//! Budget summary view
//!
//! Budget, spent and remaining amounts with a usage gauge

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::SummaryLayout;

/// Render the summary block
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Budget ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let state = app.store.state();
    if !state.is_budget_defined() {
        let text = Paragraph::new("No budget defined. Press 'b' to set one.")
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, inner);
        return;
    }

    let layout = SummaryLayout::new(inner);
    let symbol = app.settings.currency_symbol.as_str();
    let remaining = state.remaining_budget();

    let remaining_color = if remaining.is_negative() {
        Color::Red
    } else if remaining.is_zero() {
        Color::Yellow
    } else {
        Color::Green
    };

    let figures = Line::from(vec![
        Span::styled(" Budget: ", Style::default().fg(Color::White)),
        Span::styled(
            state.budget.format_with_symbol(symbol),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("Spent: ", Style::default().fg(Color::White)),
        Span::styled(
            state.total_spent().format_with_symbol(symbol),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("   "),
        Span::styled("Remaining: ", Style::default().fg(Color::White)),
        Span::styled(
            remaining.format_with_symbol(symbol),
            Style::default()
                .fg(remaining_color)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(figures), layout.figures);

    let percentage = state.spent_percentage();
    let gauge_color = if percentage >= 100.0 {
        Color::Red
    } else if percentage >= 80.0 {
        Color::Yellow
    } else {
        Color::Green
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(gauge_color).bg(Color::Black))
        .ratio(percentage / 100.0)
        .label(format!("{:.0}% spent", percentage));
    frame.render_widget(gauge, layout.gauge);
}
