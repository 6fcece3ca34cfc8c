pub mod error;
pub mod pipeline;
pub mod prompt;

pub use error::SummarizeError;
pub use pipeline::{Summarizer, SummaryResult};
