//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for the queue notifier
//! using clap. Running without a subcommand serves the queue.

pub mod commands;

use crate::config::default_config_path;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Queue Notifier - per-office patient queue with central forwarding
#[derive(Parser, Debug)]
#[command(name = "queue-notifier")]
#[command(version, about, long_about = None)]
#[command(author = "Queue Notifier Contributors")]
pub struct Cli {
    /// Path to configuration file (default: config.json beside the executable)
    #[arg(short, long, env = "QUEUE_NOTIFIER_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Configuration path, resolved beside the executable when not given
    pub fn config_path(&self) -> PathBuf {
        self.config
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(default_config_path)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the queue and watch the ingestion directory (default)
    Serve(commands::serve::ServeArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_subcommand() {
        let cli = Cli::parse_from(["queue-notifier"]);
        assert!(cli.command.is_none());
        assert!(cli.config_path().ends_with("config.json"));
    }

    #[test]
    fn test_cli_parse_serve() {
        let cli = Cli::parse_from(["queue-notifier", "serve", "--dry-run"]);
        match cli.command {
            Some(Commands::Serve(args)) => assert!(args.dry_run),
            other => panic!("Expected serve, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["queue-notifier", "--config", "custom.json", "serve"]);
        assert_eq!(cli.config_path(), PathBuf::from("custom.json"));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["queue-notifier", "--log-level", "debug"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["queue-notifier", "validate-config"]);
        assert!(matches!(cli.command, Some(Commands::ValidateConfig(_))));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["queue-notifier", "init", "--force"]);
        match cli.command {
            Some(Commands::Init(args)) => assert!(args.force),
            other => panic!("Expected init, got {other:?}"),
        }
    }
}
