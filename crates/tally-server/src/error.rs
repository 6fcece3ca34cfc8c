use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::warn;

use tally_store::StoreError;
use tally_summary::SummarizeError;

/// Error translated at the API boundary. Every failure becomes a non-2xx
/// JSON response with a short message; nothing crashes the process and no
/// internal detail leaks past the message text.
#[derive(Debug)]
pub enum ApiError {
    /// Caller-supplied data violated a precondition.
    BadRequest(String),
    /// The persistence backend failed.
    Store(StoreError),
    /// The summarization pipeline failed.
    Summarize(SummarizeError),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::InvalidInput(msg) => Self::BadRequest(msg),
            other => Self::Store(other),
        }
    }
}

impl From<SummarizeError> for ApiError {
    fn from(e: SummarizeError) -> Self {
        match e {
            SummarizeError::InvalidInput(msg) => Self::BadRequest(msg),
            other => Self::Summarize(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            Self::Store(e) => {
                warn!(error = %e, "store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "store unavailable" }),
                )
            }
            Self::Summarize(e) => {
                warn!(error = %e, "summarization failed");
                // A delivery failure still carries the generated summary;
                // pass it through so the caller does not lose it.
                let mut body = json!({ "error": e.to_string() });
                if let Some(summary) = e.summary() {
                    body["summary"] = json!(summary);
                }
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
        };
        (status, Json(body)).into_response()
    }
}
