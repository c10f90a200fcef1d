// Queue Notifier - Per-office patient queue with central forwarding
// Copyright (c) 2025 Queue Notifier Contributors
// Licensed under the MIT License

use clap::Parser;
use queue_notifier::cli::commands::serve::ServeArgs;
use queue_notifier::cli::{Cli, Commands};
use queue_notifier::config::LoggingConfig;
use queue_notifier::logging::{init_logging, LoggingGuard};
use std::process;
use tokio::sync::watch;

#[tokio::main]
async fn main() {
    // A missing .env file is not an error
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            let mut sigterm = match signal(SignalKind::terminate()) {
                Ok(sigterm) => sigterm,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to install SIGTERM handler");
                    if tokio::signal::ctrl_c().await.is_ok() {
                        let _ = shutdown_tx.send(true);
                    }
                    return;
                }
            };

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Received SIGINT (Ctrl+C), shutting down");
                }
                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM, shutting down");
                }
            }
            let _ = shutdown_tx.send(true);
        }

        #[cfg(not(unix))]
        {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            } else {
                tracing::info!("Received SIGINT (Ctrl+C), shutting down");
                let _ = shutdown_tx.send(true);
            }
        }
    });

    let exit_code = match execute_command(&cli, shutdown_rx).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command, serving when none is given
async fn execute_command(cli: &Cli, shutdown_signal: watch::Receiver<bool>) -> anyhow::Result<i32> {
    let config_path = cli.config_path();
    let log_level = cli.log_level.as_deref();

    match &cli.command {
        None => {
            ServeArgs::default()
                .execute(&config_path, log_level, shutdown_signal)
                .await
        }
        Some(Commands::Serve(args)) => args.execute(&config_path, log_level, shutdown_signal).await,
        Some(Commands::ValidateConfig(args)) => {
            let _guard = console_logging(log_level)?;
            args.execute(&config_path).await
        }
        Some(Commands::Init(args)) => {
            let _guard = console_logging(log_level)?;
            args.execute(&config_path).await
        }
    }
}

/// Console-only logging for the one-shot commands
fn console_logging(log_level: Option<&str>) -> anyhow::Result<LoggingGuard> {
    let guard = init_logging(log_level.unwrap_or("warn"), &LoggingConfig::default())?;
    Ok(guard)
}
