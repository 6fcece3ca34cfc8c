/// Typed errors for the completion client.
/// `MissingCredential` is deployment misconfiguration; the rest are
/// upstream/transport failures the caller may retry.
#[derive(Clone, Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("OpenAI API key is not configured")]
    MissingCredential,

    #[error("completion provider returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("completion response contained no choices")]
    EmptyResponse,

    #[error("network error: {0}")]
    Network(String),
}

impl CompletionError {
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::MissingCredential => false,
            Self::Upstream { status, .. } => *status == 429 || *status >= 500,
            Self::EmptyResponse | Self::Network(_) => true,
        }
    }

    /// Short classification string for logging.
    pub fn error_kind(&self) -> &'static str {
        match self {
            Self::MissingCredential => "missing_credential",
            Self::Upstream { .. } => "upstream",
            Self::EmptyResponse => "empty_response",
            Self::Network(_) => "network",
        }
    }
}
