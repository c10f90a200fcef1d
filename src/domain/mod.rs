//! Domain models and types for the queue notifier.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Partition keys** ([`DayKey`])
//! - **Patient models** ([`PatientRecord`], [`NotificationRecord`], [`Notification`])
//! - **Error types** ([`QueueError`], [`ForwardError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, QueueError>`]:
//!
//! ```rust
//! use queue_notifier::domain::{DayKey, QueueError, Result};
//!
//! fn parse_day(raw: &str) -> Result<DayKey> {
//!     DayKey::new(raw).map_err(QueueError::Configuration)
//! }
//! ```

pub mod errors;
pub mod ids;
pub mod patient;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{ForwardError, QueueError};
pub use ids::{DayKey, INTERNAL_DAY_KEY};
pub use patient::{Notification, NotificationRecord, PatientRecord};
pub use result::Result;
