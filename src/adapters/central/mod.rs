//! Centralized notification service adapter
//!
//! This module provides the transport abstraction used by the forwarder,
//! its HTTP implementation and an in-memory recorder.

pub mod http;
pub mod memory;
pub mod transport;

pub use http::HttpTransport;
pub use memory::MemoryTransport;
pub use transport::{ForwardRequest, NotificationTransport};
