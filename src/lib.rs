// Queue Notifier - Per-office patient queue with central forwarding
// Copyright (c) 2025 Queue Notifier Contributors
// Licensed under the MIT License

//! # Queue Notifier
//!
//! Queue Notifier keeps the day's patient queue for a single medical office
//! and replicates every change, stripped of personal details, to a
//! centralized notification service.
//!
//! ## Overview
//!
//! - **Registry**: day-keyed, insertion-ordered patient lists held in memory
//! - **Projection**: the internal patient record reduced to the fields the
//!   centralized service may see
//! - **Forwarding**: queued, best-effort HTTP calls delivered in order;
//!   failures are logged and never retried
//! - **Ingestion**: JSON files dropped into a watched directory are appended to
//!   the reserved `internal` day
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`api`] - HTTP endpoints (axum)
//! - [`core`] - Registry, projection, forwarding and ingestion
//! - [`adapters`] - Outbound transport and the filesystem watcher
//! - [`domain`] - Patient records, day keys and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use queue_notifier::api::{self, AppState};
//! use queue_notifier::config::load_config;
//! use queue_notifier::core::forward::Forwarder;
//! use queue_notifier::core::registry::PatientRegistry;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("config.json")?;
//!
//!     let state = AppState::new(PatientRegistry::new(), Forwarder::from_config(&config)?);
//!     let (_tx, shutdown) = tokio::sync::watch::channel(false);
//!
//!     api::serve(&config.listen_address()?, api::router(state), shutdown).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Data visibility
//!
//! ```rust
//! use queue_notifier::core::projection::project;
//! use queue_notifier::domain::PatientRecord;
//!
//! let patient = PatientRecord {
//!     patient_id: "p1".to_string(),
//!     patient_name: "Ada".to_string(),
//!     ..PatientRecord::default()
//! };
//!
//! let shared = serde_json::to_value(project(&patient)).unwrap();
//! assert_eq!(shared["patientId"], "p1");
//! assert!(shared.get("patientName").is_none());
//! ```

pub mod adapters;
pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
