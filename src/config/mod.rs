//! Configuration management for the queue notifier.
//!
//! # Overview
//!
//! The server reads a single `config.json` beside the executable with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `QUEUE_NOTIFIER_*` environment overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! # Example Configuration
//!
//! ```json
//! {
//!   "host": "https://central.example.com",
//!   "port": ":1919",
//!   "officeID": "${OFFICE_ID}",
//!   "logLevel": "info",
//!   "watchDir": "notifications",
//!   "forwarding": { "timeoutSeconds": 30, "dryRun": false },
//!   "logging": { "localEnabled": false, "localPath": "logs", "localRotation": "daily" }
//! }
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use queue_notifier::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("config.json")?;
//! println!("Forwarding to {}/{}", config.host, config.office_id);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{
    default_config_path, executable_dir, load_config, load_config_or_default,
    DEFAULT_CONFIG_FILE,
};
pub use schema::{ForwardingConfig, LoggingConfig, ServerConfig, DEFAULT_WATCH_DIR};
