//! Shared state handed to every handler

use crate::core::forward::Forwarder;
use crate::core::registry::PatientRegistry;

/// Application state shared across handlers
///
/// Both members are cheap to clone and share their underlying state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub registry: PatientRegistry,
    pub forwarder: Forwarder,
}

impl AppState {
    pub fn new(registry: PatientRegistry, forwarder: Forwarder) -> Self {
        Self {
            registry,
            forwarder,
        }
    }
}
