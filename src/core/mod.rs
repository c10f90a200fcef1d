//! Core queue logic.
//!
//! # Modules
//!
//! - [`registry`] - Day-keyed patient lists behind a single lock
//! - [`projection`] - Internal record to shared notification record
//! - [`forward`] - Ordered background replication to the centralized service
//! - [`ingest`] - Patient files from the watched directory
//!
//! # Flow
//!
//! Every change, whether it comes from an HTTP handler or a dropped file,
//! goes through the same steps:
//!
//! 1. **Mutate**: append, remove or replace in the [`registry::PatientRegistry`]
//! 2. **Project**: strip the fields the centralized service must not see
//! 3. **Forward**: spawn the outbound call and return immediately

pub mod forward;
pub mod ingest;
pub mod projection;
pub mod registry;
