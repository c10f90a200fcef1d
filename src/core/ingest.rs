//! Ingestion of patient files dropped into the watched directory
//!
//! Each newly created file is decoded as a single [`PatientRecord`],
//! appended to the reserved `internal` day and forwarded. A create event can
//! arrive before the writer has flushed, so an empty or truncated file is
//! re-read a few times before it is given up on. Files are never moved or
//! deleted. Anything that goes wrong with one file is logged and the loop
//! moves on.

use crate::adapters::watcher::WatchMessage;
use crate::core::forward::{ForwardHandle, Forwarder};
use crate::core::projection::project;
use crate::core::registry::PatientRegistry;
use crate::domain::{DayKey, PatientRecord, QueueError, Result};
use std::path::Path;
use std::time::Duration;
use tokio::sync::{mpsc, watch};

/// Reads of a file that is still empty or truncated before giving up
pub const READ_ATTEMPTS: u32 = 10;

/// Pause between reads of an incomplete file
pub const READ_RETRY_DELAY: Duration = Duration::from_millis(50);

/// Turns created files into registry entries and forwards
#[derive(Debug, Clone)]
pub struct Ingestor {
    registry: PatientRegistry,
    forwarder: Forwarder,
}

impl Ingestor {
    pub fn new(registry: PatientRegistry, forwarder: Forwarder) -> Self {
        Self {
            registry,
            forwarder,
        }
    }

    /// Ingest one file
    ///
    /// On success the record has been appended under `internal` and the
    /// returned handle tracks the queued forward.
    ///
    /// # Errors
    ///
    /// Returns an I/O or serialization error; the registry is untouched and
    /// nothing is forwarded in that case.
    pub async fn ingest_file(&self, path: &Path) -> Result<ForwardHandle> {
        let patient = read_patient(path).await?;

        let day = DayKey::internal();
        let shared = project(&patient);

        tracing::info!(
            path = %path.display(),
            patient_id = %patient.patient_id,
            "Ingested patient file"
        );

        self.registry.append(&day, patient);
        Ok(self.forwarder.send_record(&day, &shared))
    }

    /// Handle one watcher message; returns forwards that were queued
    pub async fn handle(&self, message: WatchMessage) -> Vec<ForwardHandle> {
        if let WatchMessage::Error(err) = &message {
            tracing::error!(error = %err, "Filesystem watcher error");
            return Vec::new();
        }

        let mut forwards = Vec::new();
        for path in message.created_paths() {
            if path.is_dir() {
                tracing::debug!(path = %path.display(), "Ignoring created directory");
                continue;
            }
            match self.ingest_file(path).await {
                Ok(handle) => forwards.push(handle),
                Err(e) => tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Skipping patient file"
                ),
            }
        }
        forwards
    }

    /// Run until the channel closes or shutdown is signalled
    pub async fn run(
        self,
        mut rx: mpsc::Receiver<WatchMessage>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        tracing::info!("Ingestion loop started");

        loop {
            tokio::select! {
                message = rx.recv() => {
                    let Some(message) = message else {
                        tracing::warn!("Watcher channel closed");
                        break;
                    };
                    self.handle(message).await;
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        tracing::info!("Ingestion loop stopped");
    }
}

/// Read and decode a patient file, waiting briefly for a slow writer
///
/// Only an empty file or JSON that ends early is retried; malformed content
/// and I/O errors fail immediately.
async fn read_patient(path: &Path) -> Result<PatientRecord> {
    let mut attempt = 1;
    loop {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            QueueError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let incomplete = match serde_json::from_slice::<PatientRecord>(&bytes) {
            Ok(patient) => return Ok(patient),
            Err(e) if bytes.is_empty() || e.is_eof() => e,
            Err(e) => {
                return Err(QueueError::Serialization(format!(
                    "Failed to decode {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        if attempt >= READ_ATTEMPTS {
            return Err(QueueError::Serialization(format!(
                "Failed to decode {} after {} reads: {}",
                path.display(),
                attempt,
                incomplete
            )));
        }

        tracing::debug!(path = %path.display(), attempt, "Patient file incomplete, re-reading");
        attempt += 1;
        tokio::time::sleep(READ_RETRY_DELAY).await;
    }
}
