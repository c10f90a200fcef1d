//! In-memory transport
//!
//! Records every request instead of sending it.

use super::{ForwardRequest, NotificationTransport};
use crate::domain::{ForwardError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

/// [`NotificationTransport`] that keeps requests in memory
#[derive(Debug, Default)]
pub struct MemoryTransport {
    requests: Mutex<Vec<ForwardRequest>>,
    failing: AtomicBool,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail after being recorded
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Snapshot of recorded requests, oldest first
    pub fn requests(&self) -> Vec<ForwardRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, request: ForwardRequest) -> Result<()> {
        let url = request.url().to_string();
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        if self.failing.load(Ordering::SeqCst) {
            return Err(ForwardError::ConnectionFailed(format!("{url} unreachable")).into());
        }
        Ok(())
    }
}

#[async_trait]
impl NotificationTransport for MemoryTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<()> {
        self.record(ForwardRequest::Post {
            url: url.to_string(),
            body: body.clone(),
        })
    }

    async fn delete(&self, url: &str) -> Result<()> {
        self.record(ForwardRequest::Delete {
            url: url.to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::QueueError;
    use serde_json::json;

    #[tokio::test]
    async fn test_records_in_order() {
        let transport = MemoryTransport::new();
        transport.post_json("http://c/o/1", &json!([])).await.unwrap();
        transport.delete("http://c/o/1/p").await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method(), "POST");
        assert_eq!(requests[1].url(), "http://c/o/1/p");
        assert!(requests[1].body().is_none());
    }

    #[tokio::test]
    async fn test_failing_still_records() {
        let transport = MemoryTransport::new();
        transport.set_failing(true);

        let result = transport
            .send(&ForwardRequest::Delete {
                url: "http://c/o/1/p".to_string(),
            })
            .await;

        assert!(matches!(result, Err(QueueError::Forward(_))));
        assert_eq!(transport.requests().len(), 1);
    }
}
