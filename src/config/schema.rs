//! Configuration schema types
//!
//! This module defines the shape of `config.json`. The three keys the office
//! software has always shipped (`host`, `port`, `officeID`) sit at the root;
//! everything else is optional and defaulted.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default name of the ingestion directory, resolved beside the executable
pub const DEFAULT_WATCH_DIR: &str = "notifications";

/// Main server configuration
///
/// Every field has a zero value so that a missing or unreadable config file
/// still yields a usable (if unbindable) configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the centralized service, e.g. `https://central.example.com`
    #[serde(default)]
    pub host: String,

    /// Listen address: `":1919"`, `"1919"` or `"127.0.0.1:1919"`
    #[serde(default)]
    pub port: String,

    /// Office identifier used as the first path segment of forwards
    #[serde(default, rename = "officeID")]
    pub office_id: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level", rename = "logLevel")]
    pub log_level: String,

    /// Ingestion directory; relative paths resolve beside the executable
    #[serde(default, rename = "watchDir", skip_serializing_if = "Option::is_none")]
    pub watch_dir: Option<String>,

    /// Outbound forwarding settings
    #[serde(default)]
    pub forwarding: ForwardingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: String::new(),
            office_id: String::new(),
            log_level: default_log_level(),
            watch_dir: None,
            forwarding: ForwardingConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Validates the configuration
    ///
    /// Empty `host` and `port` are accepted here; an empty port only fails
    /// once the listener is bound.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid logLevel '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }

        if !self.host.is_empty() {
            let parsed = url::Url::parse(&self.host)
                .map_err(|e| format!("Invalid host '{}': {}", self.host, e))?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                return Err(format!(
                    "Invalid host '{}'. Scheme must be http or https",
                    self.host
                ));
            }
        }

        if !self.port.is_empty() {
            self.listen_address()?;
        }

        self.forwarding.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Resolves `port` into a socket address string for the listener
    ///
    /// # Errors
    ///
    /// Returns an error when no port is configured or the value is malformed.
    pub fn listen_address(&self) -> Result<String, String> {
        let port = self.port.trim();
        if port.is_empty() {
            return Err("No listen port configured".to_string());
        }

        if let Some(bare) = port.strip_prefix(':') {
            return if is_port_number(bare) {
                Ok(format!("0.0.0.0:{bare}"))
            } else {
                Err(format!("Invalid port '{port}'"))
            };
        }

        if port.contains(':') {
            return Ok(port.to_string());
        }

        if is_port_number(port) {
            Ok(format!("0.0.0.0:{port}"))
        } else {
            Err(format!("Invalid port '{port}'"))
        }
    }

    /// Resolves the ingestion directory against `base_dir`
    pub fn resolve_watch_dir(&self, base_dir: &Path) -> PathBuf {
        match &self.watch_dir {
            Some(dir) if Path::new(dir).is_absolute() => PathBuf::from(dir),
            Some(dir) => base_dir.join(dir),
            None => base_dir.join(DEFAULT_WATCH_DIR),
        }
    }
}

/// Outbound forwarding configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardingConfig {
    /// Per-request timeout for calls to the centralized service
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Log projected payloads instead of sending them
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for ForwardingConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            dry_run: false,
        }
    }
}

impl ForwardingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.timeout_seconds == 0 {
            return Err("forwarding.timeoutSeconds must be > 0".to_string());
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.localRotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.localPath is required when local logging is enabled".to_string());
        }

        Ok(())
    }
}

fn is_port_number(s: &str) -> bool {
    s.parse::<u16>().is_ok()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero_value() {
        let config = ServerConfig::default();
        assert!(config.host.is_empty());
        assert!(config.port.is_empty());
        assert!(config.office_id.is_empty());
        assert!(config.validate().is_ok());
        assert!(config.listen_address().is_err());
    }

    #[test]
    fn test_minimal_json() {
        let config: ServerConfig = serde_json::from_str(
            r#"{"host": "http://central.example.com", "port": ":1919", "officeID": "office-42"}"#,
        )
        .unwrap();

        assert_eq!(config.office_id, "office-42");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.forwarding.timeout_seconds, 30);
        assert!(!config.logging.local_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_listen_address_forms() {
        let mut config = ServerConfig {
            port: ":1919".to_string(),
            ..Default::default()
        };
        assert_eq!(config.listen_address().unwrap(), "0.0.0.0:1919");

        config.port = "8080".to_string();
        assert_eq!(config.listen_address().unwrap(), "0.0.0.0:8080");

        config.port = "127.0.0.1:3000".to_string();
        assert_eq!(config.listen_address().unwrap(), "127.0.0.1:3000");

        config.port = "http".to_string();
        assert!(config.listen_address().is_err());

        config.port = ":99999".to_string();
        assert!(config.listen_address().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = ServerConfig {
            log_level: "verbose".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config.log_level = "debug".to_string();
        config.host = "not a url".to_string();
        assert!(config.validate().is_err());

        config.host = "ftp://central.example.com".to_string();
        assert!(config.validate().is_err());

        config.host = "https://central.example.com".to_string();
        config.forwarding.timeout_seconds = 0;
        assert!(config.validate().is_err());

        config.forwarding.timeout_seconds = 5;
        config.logging.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());

        config.logging.local_rotation = "hourly".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_resolve_watch_dir() {
        let base = Path::new("/opt/office");
        let mut config = ServerConfig::default();
        assert_eq!(
            config.resolve_watch_dir(base),
            PathBuf::from("/opt/office/notifications")
        );

        config.watch_dir = Some("inbox".to_string());
        assert_eq!(config.resolve_watch_dir(base), PathBuf::from("/opt/office/inbox"));

        config.watch_dir = Some("/var/spool/queue".to_string());
        assert_eq!(
            config.resolve_watch_dir(base),
            PathBuf::from("/var/spool/queue")
        );
    }
}
