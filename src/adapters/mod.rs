//! External system integrations.
//!
//! - [`central`] - Outbound transport to the centralized notification service
//! - [`watcher`] - Filesystem watcher for the ingestion directory
//!
//! The transport sits behind the [`central::NotificationTransport`] trait so
//! the forwarder can be driven by an in-memory recorder in tests.

pub mod central;
pub mod watcher;
