// ABOUTME: CLI argument parsing for ajo-tutorial
//
// - No command: launches the TUI shell (tutorial shown on first run)
// - status: report whether the tutorial has been seen

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Soroban Ajo terminal client
#[derive(Parser)]
#[command(name = "ajo-tutorial")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: ~/.soroban-ajo/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for client state, overrides the config file
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Keep tutorial state in memory and write no files for this run
    #[arg(long, global = true)]
    pub ephemeral: bool,
}

/// Output format for commands
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the TUI (default if no command given)
    Tui,

    /// Show whether the tutorial has been completed
    Status {
        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_defaults_to_tui() {
        let cli = Cli::parse_from(["ajo-tutorial"]);
        assert!(cli.command.is_none());
        assert!(!cli.ephemeral);
    }

    #[test]
    fn test_status_with_global_flags() {
        let cli = Cli::parse_from([
            "ajo-tutorial",
            "status",
            "--format",
            "json",
            "--data-dir",
            "/tmp/ajo",
        ]);
        assert!(matches!(
            cli.command,
            Some(Commands::Status {
                format: OutputFormat::Json
            })
        ));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/ajo")));
    }
}
