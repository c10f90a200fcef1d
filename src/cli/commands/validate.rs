//! Validate config command implementation

use crate::config::load_config;
use clap::Args;
use std::path::Path;

/// Arguments for the validate-config command
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// Returns exit code 0 when the file loads and validates, 2 otherwise.
    pub async fn execute(&self, config_path: &Path) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path.display(), "Validating configuration");

        println!("Validating configuration file: {}", config_path.display());
        println!();

        // load_config validates as its last step
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Central host: {}", display_or_unset(&config.host));
        println!("  Office ID: {}", display_or_unset(&config.office_id));
        match config.listen_address() {
            Ok(addr) => println!("  Listen address: {addr}"),
            Err(e) => println!("  Listen address: {e}"),
        }
        println!("  Log level: {}", config.log_level);
        println!(
            "  Watch directory: {}",
            config.watch_dir.as_deref().unwrap_or(crate::config::DEFAULT_WATCH_DIR)
        );
        println!(
            "  Forward timeout: {}s",
            config.forwarding.timeout_seconds
        );
        println!("  Forward dry run: {}", config.forwarding.dry_run);
        println!();
        Ok(0)
    }
}

fn display_or_unset(value: &str) -> &str {
    if value.is_empty() {
        "(not set)"
    } else {
        value
    }
}
