//! Listener lifecycle

use crate::domain::{QueueError, Result};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;

/// Bind `addr` and serve `app` until shutdown is signalled
///
/// # Errors
///
/// Returns [`QueueError::Server`] if the address cannot be bound or the
/// server stops abnormally.
pub async fn serve(addr: &str, app: Router, shutdown: watch::Receiver<bool>) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| QueueError::Server(format!("Failed to bind {addr}: {e}")))?;

    let local = listener
        .local_addr()
        .map(|a| a.to_string())
        .unwrap_or_else(|_| addr.to_string());
    tracing::info!(address = %local, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown(shutdown))
        .await
        .map_err(|e| QueueError::Server(e.to_string()))?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn wait_for_shutdown(mut shutdown: watch::Receiver<bool>) {
    while !*shutdown.borrow() {
        if shutdown.changed().await.is_err() {
            return;
        }
    }
}
