//! Dialog modules for the TUI
//!
//! Modal dialogs drawn over the main screen

pub mod budget;
pub mod confirm;
pub mod expense;
pub mod help;
