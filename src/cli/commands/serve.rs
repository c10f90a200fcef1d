//! Serve command implementation
//!
//! Starts the ingestion watcher and the HTTP listener over one shared
//! registry and forwarder, then runs until shutdown is signalled.

use crate::adapters::watcher::{watch_directory, WATCH_CHANNEL_CAPACITY};
use crate::api::{self, AppState};
use crate::config::{executable_dir, load_config_or_default};
use crate::core::forward::Forwarder;
use crate::core::ingest::Ingestor;
use crate::core::registry::PatientRegistry;
use crate::logging::init_logging;
use clap::Args;
use std::path::{Path, PathBuf};
use tokio::sync::{mpsc, watch};

/// Arguments for the serve command
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Log forwards instead of sending them to the centralized service
    #[arg(long)]
    pub dry_run: bool,

    /// Override the listen port from the configuration
    #[arg(short, long)]
    pub port: Option<String>,
}

impl ServeArgs {
    /// Execute the serve command
    ///
    /// Logging is initialized here rather than in `main` because its level
    /// and file output come from the configuration being loaded.
    pub async fn execute(
        &self,
        config_path: &Path,
        log_level: Option<&str>,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        let (mut config, load_error) = load_config_or_default(config_path);

        let level = log_level.unwrap_or(&config.log_level).to_string();
        let _guard = match init_logging(&level, &config.logging) {
            Ok(guard) => guard,
            Err(e) => {
                eprintln!("Failed to initialize logging: {e}");
                return Ok(5);
            }
        };

        tracing::info!(version = env!("CARGO_PKG_VERSION"), "Queue Notifier starting");

        if let Some(e) = load_error {
            tracing::error!(
                path = %config_path.display(),
                error = %e,
                "Failed to load configuration, continuing with empty configuration"
            );
        }

        if self.dry_run {
            tracing::info!("Enabling forwarding dry-run from CLI");
            config.forwarding.dry_run = true;
        }
        if let Some(port) = &self.port {
            tracing::info!(port = %port, "Overriding listen port from CLI");
            config.port = port.clone();
        }

        let addr = match config.listen_address() {
            Ok(addr) => addr,
            Err(e) => {
                tracing::error!(error = %e, "Cannot start HTTP listener");
                return Ok(5);
            }
        };

        let base_dir = executable_dir().unwrap_or_else(|_| PathBuf::from("."));
        let watch_dir = config.resolve_watch_dir(&base_dir);

        let registry = PatientRegistry::new();
        let forwarder = Forwarder::from_config(&config)?;
        tracing::info!(
            host = %config.host,
            office_id = %config.office_id,
            dry_run = config.forwarding.dry_run,
            "Forwarding configured"
        );

        let (tx, rx) = mpsc::channel(WATCH_CHANNEL_CAPACITY);
        let watcher = match watch_directory(&watch_dir, tx) {
            Ok(watcher) => watcher,
            Err(e) => {
                tracing::error!(path = %watch_dir.display(), error = %e, "Cannot watch directory");
                return Ok(5);
            }
        };

        let ingestor = Ingestor::new(registry.clone(), forwarder.clone());
        let ingest_task = tokio::spawn(ingestor.run(rx, shutdown_signal.clone()));

        let app = api::router(AppState::new(registry.clone(), forwarder));
        let result = api::serve(&addr, app, shutdown_signal).await;

        // Dropping the watcher closes the channel, which ends the loop if
        // the server stopped without a shutdown signal
        drop(watcher);
        if let Err(e) = ingest_task.await {
            tracing::warn!(error = %e, "Ingestion task ended abnormally");
        }

        for day in registry.day_keys() {
            tracing::info!(day = %day, queued = registry.len(&day), "Queue at shutdown");
        }

        match result {
            Ok(()) => {
                tracing::info!("Queue Notifier stopped");
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, "HTTP server failed");
                Ok(5)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_args_default() {
        let args = ServeArgs::default();
        assert!(!args.dry_run);
        assert!(args.port.is_none());
    }
}
