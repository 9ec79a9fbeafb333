//! Run report notification
//!
//! After each sweep the full report is handed to a [`Notifier`]. Notification
//! failures are logged by the caller and never change the sweep outcome.

mod webhook;

use async_trait::async_trait;

use crate::types::RunReport;

pub use webhook::WebhookNotifier;

/// Errors from delivering a notification
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("failed to build webhook client: {0}")]
    Client(reqwest::Error),

    #[error("webhook request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Trait for notification sinks
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver the report of a finished sweep
    async fn notify(&self, report: &RunReport) -> Result<(), NotifyError>;

    /// Name of this notifier for logging
    fn name(&self) -> &str;
}

/// Notifier used when no webhook is configured
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn notify(&self, _report: &RunReport) -> Result<(), NotifyError> {
        Ok(())
    }

    fn name(&self) -> &str {
        "noop"
    }
}
