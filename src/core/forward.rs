//! Ordered, fire-and-forget forwarding of registry changes
//!
//! Every registry mutation is replicated to the centralized service at
//! `{host}/{officeID}/{day}[/{patientID}]`. Forwards are queued on an
//! unbounded channel and delivered one at a time, in submission order, by a
//! single background task. Callers never wait for delivery; failures are
//! logged and dropped. There is no retry.

use crate::adapters::central::{ForwardRequest, HttpTransport, NotificationTransport};
use crate::config::ServerConfig;
use crate::domain::{DayKey, ForwardError, NotificationRecord, Result};
use crate::log_forward_failure;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use url::Url;

/// Completes once the forward has been attempted (or abandoned)
///
/// It may be dropped; it is only useful to wait for the attempt in tests or
/// during shutdown.
pub type ForwardHandle = oneshot::Receiver<()>;

/// Builds target URLs on the centralized service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardTarget {
    host: String,
    office_id: String,
}

impl ForwardTarget {
    pub fn new(host: impl Into<String>, office_id: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            office_id: office_id.into(),
        }
    }

    /// Target URL for a day, optionally narrowed to one patient
    ///
    /// Office id, day and patient id are each pushed as a single
    /// percent-encoded path segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use queue_notifier::core::forward::ForwardTarget;
    /// use queue_notifier::domain::DayKey;
    ///
    /// let target = ForwardTarget::new("http://central", "office-1");
    /// let day = DayKey::new("3").unwrap();
    ///
    /// assert_eq!(target.url(&day, None).unwrap(), "http://central/office-1/3");
    /// assert_eq!(target.url(&day, Some("a/b")).unwrap(), "http://central/office-1/3/a%2Fb");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ForwardError::InvalidTarget`] when the host is not an
    /// absolute URL that can carry a path.
    pub fn url(
        &self,
        day: &DayKey,
        patient_id: Option<&str>,
    ) -> std::result::Result<String, ForwardError> {
        let mut url = Url::parse(&self.host).map_err(|e| {
            ForwardError::InvalidTarget(format!("Invalid host '{}': {}", self.host, e))
        })?;

        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ForwardError::InvalidTarget(format!("Host '{}' cannot carry a path", self.host))
            })?;
            segments
                .pop_if_empty()
                .push(&self.office_id)
                .push(day.as_str());
            if let Some(id) = patient_id {
                segments.push(id);
            }
        }

        Ok(url.into())
    }
}

struct ForwardJob {
    request: ForwardRequest,
    dry_run: bool,
    done: oneshot::Sender<()>,
}

/// Replicates registry changes to the centralized service
#[derive(Clone)]
pub struct Forwarder {
    target: ForwardTarget,
    queue: mpsc::UnboundedSender<ForwardJob>,
    transport_name: &'static str,
    dry_run: bool,
}

impl fmt::Debug for Forwarder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Forwarder")
            .field("target", &self.target)
            .field("transport", &self.transport_name)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

impl Forwarder {
    /// Build a forwarder over the HTTP transport from configuration
    ///
    /// Must be called inside a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config.forwarding)?;
        Ok(Self::with_transport(
            &config.host,
            &config.office_id,
            Arc::new(transport),
        )
        .dry_run(config.forwarding.dry_run))
    }

    /// Build a forwarder over an arbitrary transport
    ///
    /// Spawns the delivery task, so this must be called inside a tokio
    /// runtime. The task ends once every clone of the forwarder is dropped
    /// and the queue is drained.
    pub fn with_transport(
        host: impl Into<String>,
        office_id: impl Into<String>,
        transport: Arc<dyn NotificationTransport>,
    ) -> Self {
        let (queue, jobs) = mpsc::unbounded_channel();
        let transport_name = transport.name();
        tokio::spawn(deliver_in_order(transport, jobs));

        Self {
            target: ForwardTarget::new(host, office_id),
            queue,
            transport_name,
            dry_run: false,
        }
    }

    /// Log payloads instead of sending them
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn target(&self) -> &ForwardTarget {
        &self.target
    }

    /// Forward a single projected record
    pub fn send_record(&self, day: &DayKey, record: &NotificationRecord) -> ForwardHandle {
        self.post(day, serde_json::to_value(record))
    }

    /// Forward a list of projected records
    pub fn send_bulk(&self, day: &DayKey, records: &[NotificationRecord]) -> ForwardHandle {
        self.post(day, serde_json::to_value(records))
    }

    /// Forward the removal of a patient
    pub fn send_delete(&self, day: &DayKey, patient_id: &str) -> ForwardHandle {
        match self.target.url(day, Some(patient_id)) {
            Ok(url) => self.dispatch(ForwardRequest::Delete { url }),
            Err(e) => abandon("DELETE", day, e),
        }
    }

    fn post(
        &self,
        day: &DayKey,
        body: std::result::Result<Value, serde_json::Error>,
    ) -> ForwardHandle {
        let url = match self.target.url(day, None) {
            Ok(url) => url,
            Err(e) => return abandon("POST", day, e),
        };
        match body {
            Ok(body) => self.dispatch(ForwardRequest::Post { url, body }),
            Err(e) => abandon("POST", url, ForwardError::InvalidPayload(e.to_string())),
        }
    }

    /// Queue the request behind every forward submitted before it
    pub fn dispatch(&self, request: ForwardRequest) -> ForwardHandle {
        let (done, handle) = oneshot::channel();
        let job = ForwardJob {
            request,
            dry_run: self.dry_run,
            done,
        };

        if let Err(mpsc::error::SendError(job)) = self.queue.send(job) {
            log_forward_failure!(
                job.request.method(),
                job.request.url(),
                "forwarding queue closed"
            );
            let _ = job.done.send(());
        }
        handle
    }
}

fn abandon(
    method: &'static str,
    target: impl fmt::Display,
    error: ForwardError,
) -> ForwardHandle {
    log_forward_failure!(method, target, error);
    let (done, handle) = oneshot::channel();
    let _ = done.send(());
    handle
}

async fn deliver_in_order(
    transport: Arc<dyn NotificationTransport>,
    mut jobs: mpsc::UnboundedReceiver<ForwardJob>,
) {
    while let Some(job) = jobs.recv().await {
        let request = &job.request;

        if job.dry_run {
            tracing::info!(
                method = request.method(),
                url = request.url(),
                body = ?request.body(),
                "Dry run: forward not sent"
            );
        } else {
            match transport.send(request).await {
                Ok(()) => tracing::debug!(
                    method = request.method(),
                    url = request.url(),
                    "Forwarded to centralized service"
                ),
                Err(e) => log_forward_failure!(request.method(), request.url(), e),
            }
        }

        let _ = job.done.send(());
    }

    tracing::debug!("Forwarding queue closed");
}
