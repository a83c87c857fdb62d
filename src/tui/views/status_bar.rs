//! Status bar view
//!
//! Shows the active category filter, transient messages and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    let filter = match app.store.state().current_category {
        Some(category) => category.name(),
        None => "All",
    };
    spans.push(Span::styled(" Filter: ", Style::default().fg(Color::White)));
    spans.push(Span::styled(filter, Style::default().fg(Color::Cyan)));

    let count = app.visible_ids().len();
    spans.push(Span::raw(" │ "));
    spans.push(Span::styled(
        format!("{} shown", count),
        Style::default().fg(Color::White),
    ));

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.text.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = " q:Quit  ?:Help  a:Add  b:Budget ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
