//! Init command implementation
//!
//! Writes a sample `config.json` that passes `validate-config` as-is.

use crate::config::{ForwardingConfig, LoggingConfig, ServerConfig, DEFAULT_WATCH_DIR};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

/// Arguments for the init command
#[derive(Args, Debug, Default)]
pub struct InitArgs {
    /// Path where to create the configuration file (default: the --config path)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self, config_path: &Path) -> anyhow::Result<i32> {
        let output = self
            .output
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| config_path.to_path_buf());

        tracing::info!(output = %output.display(), "Initializing configuration file");

        if output.exists() && !self.force {
            println!("Configuration file already exists: {}", output.display());
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        let content = Self::sample_config()?;

        match fs::write(&output, content) {
            Ok(_) => {
                println!("Configuration file created: {}", output.display());
                println!();
                println!("Next steps:");
                println!("  1. Set host to the centralized service URL");
                println!("  2. Set officeID to this office's identifier");
                println!("  3. Validate configuration: queue-notifier validate-config");
                println!("  4. Start serving: queue-notifier serve");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Sample configuration with every section spelled out
    fn sample_config() -> serde_json::Result<String> {
        let sample = ServerConfig {
            host: "https://central.example.com".to_string(),
            port: ":1919".to_string(),
            office_id: "office-1".to_string(),
            watch_dir: Some(DEFAULT_WATCH_DIR.to_string()),
            forwarding: ForwardingConfig::default(),
            logging: LoggingConfig::default(),
            ..ServerConfig::default()
        };
        let mut content = serde_json::to_string_pretty(&sample)?;
        content.push('\n');
        Ok(content)
    }
}
