use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::cmd::Commands;

/// In-memory to-do list for the terminal.
/// Nothing is saved; the list starts empty on every launch.
#[derive(Parser)]
#[command(name = "todo", version, about = "Terminal to-do list widget")]
pub struct Cli {
    /// Write logs to this file (filtered by RUST_LOG, default "info").
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Event poll interval in milliseconds.
    #[arg(long, global = true, default_value_t = 50)]
    pub tick_ms: u64,

    /// Print the final list as JSON after the UI exits.
    #[arg(long, global = true)]
    pub print: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Runtime settings derived from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub tick: Duration,
    pub log_file: Option<PathBuf>,
    pub print_on_exit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tick: Duration::from_millis(50),
            log_file: None,
            print_on_exit: false,
        }
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Config {
            tick: Duration::from_millis(cli.tick_ms.max(1)),
            log_file: cli.log_file.clone(),
            print_on_exit: cli.print,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_launch_ui() {
        let cli = Cli::try_parse_from(["todo"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(Config::from(&cli), Config::default());
    }

    #[test]
    fn test_flags_map_to_config() {
        let cli = Cli::try_parse_from(["todo", "ui", "--tick-ms", "0", "--print", "--log-file", "t.log"])
            .unwrap();
        assert!(matches!(cli.command, Some(Commands::Ui)));
        let config = Config::from(&cli);
        assert_eq!(config.tick, Duration::from_millis(1));
        assert!(config.print_on_exit);
        assert_eq!(config.log_file, Some(PathBuf::from("t.log")));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
