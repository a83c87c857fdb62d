//! Terminal User Interface module
//!
//! A single-screen ratatui front end: the budget summary, the filtered
//! expense list, and dialogs for the expense form and the budget ceiling.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
