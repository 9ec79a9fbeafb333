//! Webhook notification sink

use async_trait::async_trait;
use std::time::Duration;

use super::{Notifier, NotifyError};
use crate::types::RunReport;

/// Notifier that POSTs the run report as JSON to a configured URL
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(NotifyError::Client)?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, report: &RunReport) -> Result<(), NotifyError> {
        let response = self.client.post(&self.url).json(report).send().await?;
        response.error_for_status()?;

        tracing::debug!(url = %self.url, run_id = %report.run_id, "Webhook notified");
        Ok(())
    }

    fn name(&self) -> &str {
        "webhook"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TargetReport;
    use chrono::Utc;
    use uuid::Uuid;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn report() -> RunReport {
        RunReport {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            finished_at: Utc::now(),
            results: vec![TargetReport::ok("orders", "gs://b/k")],
        }
    }

    #[tokio::test]
    async fn posts_report_to_configured_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hooks/backup"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let notifier = WebhookNotifier::new(
            format!("{}/hooks/backup", server.uri()),
            Duration::from_secs(5),
        )
        .unwrap();

        notifier.notify(&report()).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = requests[0].body_json().unwrap();
        assert_eq!(body["results"][0]["status"], "ok");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let notifier =
            WebhookNotifier::new(server.uri(), Duration::from_secs(5)).unwrap();

        let err = notifier.notify(&report()).await.unwrap_err();
        assert!(matches!(err, NotifyError::Request(_)));
    }
}
