use tally_llm::CompletionError;
use tally_notify::DeliveryError;

/// Pipeline failure taxonomy. `InvalidInput` is the caller's to fix; the
/// other two wrap the failing leaf client's error.
#[derive(Debug, thiserror::Error)]
pub enum SummarizeError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("completion unavailable: {0}")]
    CompletionUnavailable(#[source] CompletionError),

    /// Delivery failed after a successful completion. The generated summary
    /// rides along so the caller can still surface it.
    #[error("delivery failed: {source}")]
    DeliveryFailed {
        summary: String,
        #[source]
        source: DeliveryError,
    },
}

impl SummarizeError {
    /// The summary text, when the pipeline got far enough to generate one.
    pub fn summary(&self) -> Option<&str> {
        match self {
            Self::DeliveryFailed { summary, .. } => Some(summary),
            _ => None,
        }
    }
}
