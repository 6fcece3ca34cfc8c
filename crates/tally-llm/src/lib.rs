pub mod client;
pub mod error;
pub mod types;

pub mod mock;

pub use client::{CompletionClient, CompletionRequest, OpenAiClient, OpenAiConfig};
pub use error::CompletionError;
pub use mock::MockCompletion;
