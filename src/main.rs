//! # todo - terminal to-do list
//!
//! A small to-do list widget for the terminal. Tasks live in memory only and
//! the list starts empty on every launch.
//!
//! ## Interactions
//!
//! - Type a description and press Enter (or click `[ Add ]`) to append a task
//! - Click a task's `✕` (or press `d` on the selected row) to delete it
//! - Drag a task onto another with the left mouse button to move it there,
//!   or use Shift+Up / Shift+Down on the selected row
//! - Click `[ Sort ]` (or press `s`) to sort; each sort flips direction
//!
//! ## Usage
//!
//! ```bash
//! todo                         # launch the UI
//! todo --log-file todo.log     # with logging (RUST_LOG controls the filter)
//! todo --print > tasks.json    # dump the final list when quitting
//! todo completions zsh
//! ```

use std::fs::File;
use std::sync::Mutex;

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod drag;
pub mod error;
pub mod store;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod enums;
    pub mod icons;
    pub mod input;
    pub mod list_view;
    pub mod run;
}

use cli::{Cli, Config};
use cmd::*;
use error::{Error, Result};

/// Install a file-backed subscriber. The terminal itself is owned by the UI,
/// so without a log file nothing is installed.
fn init_tracing(config: &Config) -> Result<()> {
    let Some(path) = config.log_file.as_ref() else {
        return Ok(());
    };
    let file = File::create(path).map_err(|source| Error::LogFile {
        path: path.clone(),
        source,
    })?;
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}

fn main() {
    let cli = Cli::parse();
    let config = Config::from(&cli);

    if let Err(e) = init_tracing(&config) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let result = match cli.command {
        Some(Commands::Completions { shell }) => {
            cmd_completions(shell);
            Ok(())
        }
        Some(Commands::Ui) | None => cmd_ui(&config),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "todo exited with an error");
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
