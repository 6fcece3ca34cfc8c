use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{instrument, warn};

use crate::error::DeliveryError;
use crate::payload::ChatPayload;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Trait seam for message delivery, so the pipeline can run against a test
/// double.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Deliver the payload. One synchronous HTTP round trip; no queuing,
    /// no retry, no confirmation beyond the response status.
    async fn deliver(&self, payload: &ChatPayload) -> Result<(), DeliveryError>;
}

/// Configuration injected at construction. A missing URL is not an error
/// here; it surfaces as `MissingConfiguration` on the first delivery.
#[derive(Clone, Debug, Default)]
pub struct SlackConfig {
    pub webhook_url: Option<String>,
}

impl SlackConfig {
    pub fn with_webhook_url(url: impl Into<String>) -> Self {
        Self {
            webhook_url: Some(url.into()),
        }
    }
}

/// Delivers payloads to a Slack incoming-webhook URL.
pub struct SlackSink {
    client: Client,
    config: SlackConfig,
}

impl SlackSink {
    pub fn new(config: SlackConfig) -> Self {
        Self {
            client: Client::builder()
                .connect_timeout(CONNECT_TIMEOUT)
                .build()
                .expect("failed to build HTTP client"),
            config,
        }
    }
}

impl std::fmt::Debug for SlackSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Webhook URLs embed a secret token; log only whether one is set.
        f.debug_struct("SlackSink")
            .field("configured", &self.config.webhook_url.is_some())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl NotificationSink for SlackSink {
    #[instrument(skip(self, payload), fields(blocks = payload.blocks.len()))]
    async fn deliver(&self, payload: &ChatPayload) -> Result<(), DeliveryError> {
        let url = self
            .config
            .webhook_url
            .as_deref()
            .ok_or(DeliveryError::MissingConfiguration)?;

        let resp = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| DeliveryError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let status_text = resp
                .status()
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string();
            warn!(status, status_text = %status_text, "webhook delivery failed");
            return Err(DeliveryError::Transport {
                status,
                status_text,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::Block;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_payload() -> ChatPayload {
        ChatPayload::new(vec![
            Block::header("📋 Todo Summary"),
            Block::section("summary"),
        ])
    }

    #[tokio::test]
    async fn missing_configuration_fails_without_network() {
        let sink = SlackSink::new(SlackConfig::default());
        let result = sink.deliver(&test_payload()).await;
        assert!(matches!(result, Err(DeliveryError::MissingConfiguration)));
    }

    #[tokio::test]
    async fn delivers_blocks_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/services/T000/B000/hook"))
            .and(body_partial_json(json!({
                "blocks": [ { "type": "header" }, { "type": "section" } ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let sink = SlackSink::new(SlackConfig::with_webhook_url(format!(
            "{}/services/T000/B000/hook",
            server.uri()
        )));
        sink.deliver(&test_payload()).await.unwrap();
    }

    #[tokio::test]
    async fn non_success_status_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no_service"))
            .mount(&server)
            .await;

        let sink = SlackSink::new(SlackConfig::with_webhook_url(server.uri()));
        let result = sink.deliver(&test_payload()).await;
        match result {
            Err(DeliveryError::Transport { status, status_text }) => {
                assert_eq!(status, 404);
                assert_eq!(status_text, "Not Found");
            }
            other => panic!("expected Transport error, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        let sink = SlackSink::new(SlackConfig::with_webhook_url("http://127.0.0.1:1/hook"));
        let result = sink.deliver(&test_payload()).await;
        assert!(matches!(result, Err(DeliveryError::Network(_))));
    }

    #[test]
    fn debug_does_not_leak_webhook_url() {
        let sink = SlackSink::new(SlackConfig::with_webhook_url(
            "https://hooks.slack.com/services/T000/B000/secret-token",
        ));
        let debug = format!("{sink:?}");
        assert!(!debug.contains("secret-token"));
    }
}
