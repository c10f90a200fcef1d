//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels
//! - Console output
//! - Local JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use queue_notifier::logging::init_logging;
//! use queue_notifier::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log a forward that was abandoned
///
/// # Example
///
/// ```no_run
/// use queue_notifier::log_forward_failure;
///
/// log_forward_failure!("POST", "http://central/office/3", "connection refused");
/// ```
#[macro_export]
macro_rules! log_forward_failure {
    ($method:expr, $url:expr, $error:expr) => {
        tracing::warn!(
            method = $method,
            url = %$url,
            error = %$error,
            "Forward to centralized service failed, discarding"
        )
    };
}

/// Log a read of a day key that was never written
///
/// # Example
///
/// ```no_run
/// use queue_notifier::log_registry_miss;
///
/// log_registry_miss!("12");
/// ```
#[macro_export]
macro_rules! log_registry_miss {
    ($day:expr) => {
        tracing::info!(day = %$day, "No patients recorded for day")
    };
}
