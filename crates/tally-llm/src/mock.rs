//! Pre-programmed completion responses for deterministic testing without
//! API calls.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::client::{CompletionClient, CompletionRequest};
use crate::error::CompletionError;

/// One canned outcome for a `complete` call.
#[derive(Clone, Debug)]
pub enum MockOutcome {
    Text(String),
    Error(CompletionError),
}

/// Mock completion client that returns canned outcomes in sequence and
/// records the requests it received.
pub struct MockCompletion {
    outcomes: Vec<MockOutcome>,
    call_count: AtomicUsize,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockCompletion {
    pub fn new(outcomes: Vec<MockOutcome>) -> Self {
        Self {
            outcomes,
            call_count: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Convenience: always answer with the same text.
    pub fn with_text(text: &str) -> Self {
        Self::new(vec![MockOutcome::Text(text.to_string())])
    }

    /// Convenience: always fail with the given error.
    pub fn with_error(error: CompletionError) -> Self {
        Self::new(vec![MockOutcome::Error(error)])
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Requests seen so far, in call order.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl CompletionClient for MockCompletion {
    fn name(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let idx = self.call_count.fetch_add(1, Ordering::Relaxed);
        self.requests.lock().push(request.clone());

        // Repeat the last outcome once the sequence is exhausted.
        let outcome = self
            .outcomes
            .get(idx)
            .or_else(|| self.outcomes.last())
            .cloned()
            .unwrap_or(MockOutcome::Error(CompletionError::EmptyResponse));

        match outcome {
            MockOutcome::Text(text) => Ok(text),
            MockOutcome::Error(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(user: &str) -> CompletionRequest {
        CompletionRequest {
            system: "sys".into(),
            user: user.into(),
            temperature: 0.7,
            max_tokens: 500,
        }
    }

    #[tokio::test]
    async fn returns_canned_text() {
        let mock = MockCompletion::with_text("canned");
        let out = mock.complete(&request("hello")).await.unwrap();
        assert_eq!(out, "canned");
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn returns_canned_error() {
        let mock = MockCompletion::with_error(CompletionError::MissingCredential);
        let result = mock.complete(&request("hello")).await;
        assert!(matches!(result, Err(CompletionError::MissingCredential)));
    }

    #[tokio::test]
    async fn sequential_outcomes() {
        let mock = MockCompletion::new(vec![
            MockOutcome::Text("first".into()),
            MockOutcome::Error(CompletionError::EmptyResponse),
        ]);
        assert_eq!(mock.complete(&request("a")).await.unwrap(), "first");
        assert!(mock.complete(&request("b")).await.is_err());
        // Exhausted, last outcome repeats
        assert!(mock.complete(&request("c")).await.is_err());
        assert_eq!(mock.call_count(), 3);
    }

    #[tokio::test]
    async fn records_requests_in_order() {
        let mock = MockCompletion::with_text("ok");
        mock.complete(&request("one")).await.unwrap();
        mock.complete(&request("two")).await.unwrap();

        let seen = mock.requests();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].user, "one");
        assert_eq!(seen[1].user, "two");
    }
}
