//! Filesystem watcher for the ingestion directory
//!
//! A thin wrapper around `notify`: raw events and watcher errors are pushed
//! into one tokio channel as [`WatchMessage`]s. Interpretation (which events
//! matter, what to do with the file) belongs to [`crate::core::ingest`].

use crate::domain::{QueueError, Result};
use notify::{Config as NotifyConfig, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

/// Capacity of the watcher channel
pub const WATCH_CHANNEL_CAPACITY: usize = 256;

/// One message from the filesystem watcher
pub enum WatchMessage {
    /// A raw filesystem event
    Event(Event),
    /// A watcher-internal error
    Error(String),
}

impl fmt::Debug for WatchMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WatchMessage::Event(event) => f
                .debug_struct("WatchMessage::Event")
                .field("kind", &event.kind)
                .field("paths", &event.paths)
                .finish(),
            WatchMessage::Error(message) => f
                .debug_struct("WatchMessage::Error")
                .field("message", message)
                .finish(),
        }
    }
}

impl WatchMessage {
    /// Paths of newly created entries, empty for anything else
    pub fn created_paths(&self) -> &[PathBuf] {
        match self {
            WatchMessage::Event(event) if matches!(event.kind, EventKind::Create(_)) => {
                &event.paths
            }
            _ => &[],
        }
    }
}

/// Keeps a `notify` watcher alive; dropping it stops the event stream
pub struct DirectoryWatcher {
    _watcher: RecommendedWatcher,
    path: PathBuf,
}

impl fmt::Debug for DirectoryWatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectoryWatcher")
            .field("path", &self.path)
            .finish()
    }
}

impl DirectoryWatcher {
    /// Watched directory
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Start watching `path` (non-recursively), sending messages into `tx`
///
/// # Errors
///
/// Returns [`QueueError::Watcher`] if `path` is not a directory or the
/// platform watcher cannot be created.
pub fn watch_directory(path: &Path, tx: mpsc::Sender<WatchMessage>) -> Result<DirectoryWatcher> {
    if !path.is_dir() {
        return Err(QueueError::Watcher(format!(
            "Watch path is not a directory: {}",
            path.display()
        )));
    }

    let path_for_log = path.to_path_buf();
    let mut watcher = RecommendedWatcher::new(
        move |res: std::result::Result<Event, notify::Error>| {
            let message = match res {
                Ok(event) => WatchMessage::Event(event),
                Err(err) => WatchMessage::Error(err.to_string()),
            };
            if let Err(err) = tx.blocking_send(message) {
                tracing::warn!(
                    path = %path_for_log.display(),
                    error = %err,
                    "Watcher channel closed, dropping event"
                );
            }
        },
        NotifyConfig::default(),
    )
    .map_err(|e| {
        QueueError::Watcher(format!(
            "Failed to create watcher for {}: {}",
            path.display(),
            e
        ))
    })?;

    watcher
        .watch(path, RecursiveMode::NonRecursive)
        .map_err(|e| QueueError::Watcher(format!("Failed to watch {}: {}", path.display(), e)))?;

    tracing::info!(path = %path.display(), "Watching ingestion directory");

    Ok(DirectoryWatcher {
        _watcher: watcher,
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind, RemoveKind};

    fn event(kind: EventKind, path: &str) -> WatchMessage {
        WatchMessage::Event(Event::new(kind).add_path(PathBuf::from(path)))
    }

    #[test]
    fn test_created_paths_only_for_create() {
        let created = event(EventKind::Create(CreateKind::File), "/tmp/a.json");
        assert_eq!(created.created_paths(), &[PathBuf::from("/tmp/a.json")]);

        let modified = event(EventKind::Modify(ModifyKind::Any), "/tmp/a.json");
        assert!(modified.created_paths().is_empty());

        let removed = event(EventKind::Remove(RemoveKind::File), "/tmp/a.json");
        assert!(removed.created_paths().is_empty());

        let error = WatchMessage::Error("queue overflow".to_string());
        assert!(error.created_paths().is_empty());
    }

    #[test]
    fn test_watch_missing_directory_fails() {
        let (tx, _rx) = mpsc::channel(1);
        let result = watch_directory(Path::new("/definitely/not/here"), tx);
        assert!(matches!(result, Err(QueueError::Watcher(_))));
    }

    #[tokio::test]
    async fn test_watch_existing_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let (tx, _rx) = mpsc::channel(WATCH_CHANNEL_CAPACITY);
        let watcher = watch_directory(dir.path(), tx).unwrap();
        assert_eq!(watcher.path(), dir.path());
    }
}
