//! Command implementations for the CLI interface.

use clap::Subcommand;
use clap_complete::{generate, Shell};

use crate::cli::Config;
use crate::error::Result;
use crate::tui::run::run_tui;

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the to-do list interface (the default).
    Ui,

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Run the interactive list, optionally dumping the final tasks as JSON.
pub fn cmd_ui(config: &Config) -> Result<()> {
    let store = run_tui(config)?;
    tracing::info!(tasks = store.len(), "ui closed");
    if config.print_on_exit {
        println!("{}", serde_json::to_string_pretty(store.tasks())?);
    }
    Ok(())
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;
    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}
