//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: budget summary, expense list,
//! status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Budget, spending and remaining amount with a gauge
    pub summary: Rect,
    /// Expense list
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // Summary
                Constraint::Min(3),    // Expense list
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            summary: vertical[0],
            main: vertical[1],
            status_bar: vertical[2],
        }
    }
}

/// Layout inside the summary block
pub struct SummaryLayout {
    /// Budget / spent / remaining figures
    pub figures: Rect,
    /// Progress gauge
    pub gauge: Rect,
}

impl SummaryLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Figures
                Constraint::Length(2), // Gauge
            ])
            .split(area);

        Self {
            figures: chunks[0],
            gauge: chunks[1],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
