//! Category CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_category_list;
use crate::error::BudgetResult;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List the category catalog with spending per category
    List,
}

/// Handle a category command
pub fn handle_category_command(
    storage: &Storage,
    settings: &Settings,
    cmd: CategoryCommands,
) -> BudgetResult<()> {
    match cmd {
        CategoryCommands::List => {
            let state = storage.load_state()?;
            print!(
                "{}",
                format_category_list(&state.expenses, &settings.currency_symbol)
            );
        }
    }

    Ok(())
}
