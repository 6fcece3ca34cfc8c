/// Delivery errors. `MissingConfiguration` is deployment misconfiguration;
/// the rest are transient transport failures.
#[derive(Clone, Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("webhook URL is not configured")]
    MissingConfiguration,

    #[error("webhook delivery failed: {status_text}")]
    Transport { status: u16, status_text: String },

    #[error("network error: {0}")]
    Network(String),
}

impl DeliveryError {
    pub fn error_kind(&self) -> &'static str {
        match self {
            Self::MissingConfiguration => "missing_configuration",
            Self::Transport { .. } => "transport",
            Self::Network(_) => "network",
        }
    }
}
