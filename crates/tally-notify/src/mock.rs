//! Recording sink for deterministic testing without a webhook.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::DeliveryError;
use crate::payload::ChatPayload;
use crate::sink::NotificationSink;

/// Mock sink that records delivered payloads and optionally fails every
/// delivery with a configured error.
#[derive(Default)]
pub struct MockSink {
    delivered: Mutex<Vec<ChatPayload>>,
    failure: Option<DeliveryError>,
}

impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_with(error: DeliveryError) -> Self {
        Self {
            delivered: Mutex::new(Vec::new()),
            failure: Some(error),
        }
    }

    pub fn delivered(&self) -> Vec<ChatPayload> {
        self.delivered.lock().clone()
    }

    pub fn delivery_count(&self) -> usize {
        self.delivered.lock().len()
    }
}

#[async_trait]
impl NotificationSink for MockSink {
    async fn deliver(&self, payload: &ChatPayload) -> Result<(), DeliveryError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.delivered.lock().push(payload.clone());
        Ok(())
    }
}
