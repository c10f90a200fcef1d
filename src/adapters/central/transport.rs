//! Transport trait for the centralized notification service
//!
//! The forwarder only speaks to the centralized service through
//! [`NotificationTransport`].

use crate::domain::Result;
use async_trait::async_trait;
use serde_json::Value;

/// One outbound call
#[derive(Debug, Clone, PartialEq)]
pub enum ForwardRequest {
    /// POST a projected record or list of records
    Post { url: String, body: Value },
    /// DELETE a single patient
    Delete { url: String },
}

impl ForwardRequest {
    /// HTTP method name, for logging
    pub fn method(&self) -> &'static str {
        match self {
            ForwardRequest::Post { .. } => "POST",
            ForwardRequest::Delete { .. } => "DELETE",
        }
    }

    /// Target URL
    pub fn url(&self) -> &str {
        match self {
            ForwardRequest::Post { url, .. } | ForwardRequest::Delete { url } => url,
        }
    }

    /// JSON body, for POST requests
    pub fn body(&self) -> Option<&Value> {
        match self {
            ForwardRequest::Post { body, .. } => Some(body),
            ForwardRequest::Delete { .. } => None,
        }
    }
}

/// Outbound calls understood by the centralized service
#[async_trait]
pub trait NotificationTransport: Send + Sync {
    /// POST a JSON body to `url`
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ForwardError`] (wrapped) when the request
    /// cannot be sent or the service answers with a non-success status.
    async fn post_json(&self, url: &str, body: &Value) -> Result<()>;

    /// DELETE `url` without a body
    async fn delete(&self, url: &str) -> Result<()>;

    /// Short label used in logs
    fn name(&self) -> &'static str;

    /// Execute a [`ForwardRequest`]
    async fn send(&self, request: &ForwardRequest) -> Result<()> {
        match request {
            ForwardRequest::Post { url, body } => self.post_json(url, body).await,
            ForwardRequest::Delete { url } => self.delete(url).await,
        }
    }
}
