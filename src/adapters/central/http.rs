//! HTTP transport to the centralized service
//!
//! Plain unauthenticated HTTP(S) calls via `reqwest`, one request per forward,
//! no retries.

use super::NotificationTransport;
use crate::config::ForwardingConfig;
use crate::domain::{ForwardError, QueueError, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Response};
use serde_json::Value;
use std::time::Duration;

/// reqwest-backed [`NotificationTransport`]
///
/// # Example
///
/// ```no_run
/// use queue_notifier::adapters::central::{HttpTransport, NotificationTransport};
/// use queue_notifier::config::ForwardingConfig;
///
/// # async fn example() -> queue_notifier::domain::Result<()> {
/// let transport = HttpTransport::new(&ForwardingConfig::default())?;
/// transport.delete("http://central.example.com/office-1/3/p1").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a transport with the configured request timeout
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: &ForwardingConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| QueueError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    async fn check_response(response: Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or("").to_string());
        Err(ForwardError::from_status(status.as_u16(), message).into())
    }
}

fn map_send_error(err: reqwest::Error) -> QueueError {
    if err.is_timeout() {
        ForwardError::Timeout(err.to_string()).into()
    } else {
        ForwardError::ConnectionFailed(err.to_string()).into()
    }
}

#[async_trait]
impl NotificationTransport for HttpTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<()> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(map_send_error)?;

        Self::check_response(response).await
    }

    async fn delete(&self, url: &str) -> Result<()> {
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(map_send_error)?;

        Self::check_response(response).await
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
