//! Configuration loader with JSON parsing and environment variable overrides

use super::schema::ServerConfig;
use crate::domain::errors::QueueError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name, resolved beside the executable
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Loads configuration from a JSON file
///
/// This function:
/// 1. Reads the JSON file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the JSON into ServerConfig
/// 4. Applies environment variable overrides (QUEUE_NOTIFIER_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - JSON parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use queue_notifier::config::loader::load_config;
///
/// let config = load_config("config.json").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ServerConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(QueueError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        QueueError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: ServerConfig = serde_json::from_str(&contents)
        .map_err(|e| QueueError::Configuration(format!("Failed to parse JSON: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        QueueError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Loads configuration, falling back to the zero-value config on failure
///
/// The failure is handed back rather than logged, since logging is usually
/// configured from the result. Startup continues either way; an empty port
/// will then fail when the listener is bound.
pub fn load_config_or_default(path: impl AsRef<Path>) -> (ServerConfig, Option<QueueError>) {
    match load_config(path) {
        Ok(config) => (config, None),
        Err(e) => (ServerConfig::default(), Some(e)),
    }
}

/// Directory containing the running executable
///
/// # Errors
///
/// Returns an error if the executable path cannot be determined.
pub fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let exe = exe.canonicalize().unwrap_or(exe);
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        QueueError::Configuration(format!(
            "Executable path has no parent directory: {}",
            exe.display()
        ))
    })
}

/// Default location of `config.json` beside the executable
pub fn default_config_path() -> PathBuf {
    executable_dir()
        .map(|dir| dir.join(DEFAULT_CONFIG_FILE))
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| QueueError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut missing_vars: Vec<String> = Vec::new();

    let result = re.replace_all(input, |cap: &regex::Captures<'_>| {
        let var_name = &cap[1];
        match std::env::var(var_name) {
            Ok(value) => value,
            Err(_) => {
                if !missing_vars.iter().any(|v| v == var_name) {
                    missing_vars.push(var_name.to_string());
                }
                String::new()
            }
        }
    });

    if !missing_vars.is_empty() {
        return Err(QueueError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result.into_owned())
}

/// Applies environment variable overrides using QUEUE_NOTIFIER_* prefix
///
/// For example: QUEUE_NOTIFIER_HOST, QUEUE_NOTIFIER_FORWARDING_DRY_RUN
fn apply_env_overrides(config: &mut ServerConfig) {
    if let Ok(val) = std::env::var("QUEUE_NOTIFIER_HOST") {
        config.host = val;
    }
    if let Ok(val) = std::env::var("QUEUE_NOTIFIER_PORT") {
        config.port = val;
    }
    if let Ok(val) = std::env::var("QUEUE_NOTIFIER_OFFICE_ID") {
        config.office_id = val;
    }
    if let Ok(val) = std::env::var("QUEUE_NOTIFIER_WATCH_DIR") {
        config.watch_dir = Some(val);
    }
    if let Ok(val) = std::env::var("QUEUE_NOTIFIER_LOG_LEVEL") {
        config.log_level = val;
    }

    if let Ok(val) = std::env::var("QUEUE_NOTIFIER_FORWARDING_DRY_RUN") {
        config.forwarding.dry_run = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("QUEUE_NOTIFIER_FORWARDING_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.forwarding.timeout_seconds = timeout;
        }
    }

    if let Ok(val) = std::env::var("QUEUE_NOTIFIER_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("QUEUE_NOTIFIER_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
