use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::cli::{
    handle_category_command, handle_expense_command, handle_history_command,
    handle_reset_command, handle_set_command, handle_status_command, CategoryCommands,
    ExpenseCommands,
};
use budget_tracker::config::{paths::BudgetPaths, settings::Settings};
use budget_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Budget Tracker keeps a list of expenses against a fixed budget \
                  ceiling. Expenses that would take spending past the budget are \
                  refused, and the list can be filtered by category."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Initialize the data directory and settings
    Init,

    /// Show current configuration and paths
    Config,

    /// Define the budget ceiling
    Set {
        /// Budget amount (e.g., "500" or "500.00")
        amount: String,
    },

    /// Show budget, spending and what is left
    Status,

    /// Delete the budget and every expense
    Reset {
        /// Skip the confirmation notice
        #[arg(short, long)]
        force: bool,
    },

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Category commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Show the audit history
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Some(Commands::Tui) => {
            budget_tracker::tui::run_tui(&storage, &settings)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Budget Tracker at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            if !paths.state_file().exists() {
                storage.save_state(&storage.load_state()?)?;
            }
            println!("Initialization complete!");
            println!();
            println!("Run 'budget set <amount>' to define your budget.");
        }
        Some(Commands::Config) => {
            println!("Budget Tracker Configuration");
            println!("============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("State file:      {}", paths.state_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Date format:         {}", settings.date_format);
            println!("  Error display (s):   {}", settings.error_display_secs);
            println!("  Tick rate (ms):      {}", settings.tick_rate_ms);
        }
        Some(Commands::Set { amount }) => {
            handle_set_command(&storage, &settings, &amount)?;
        }
        Some(Commands::Status) => {
            handle_status_command(&storage, &settings)?;
        }
        Some(Commands::Reset { force }) => {
            handle_reset_command(&storage, force)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, &settings, cmd)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&storage, limit)?;
        }
        None => {
            println!("Budget Tracker - personal expenses against a fixed budget");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
