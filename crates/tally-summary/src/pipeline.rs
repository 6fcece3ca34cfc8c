//! The summarization pipeline: validate, prompt, complete, format, deliver.
//!
//! Two sequential outbound calls per invocation; the chat payload depends on
//! the completion result, so there is nothing to parallelize. No retries and
//! no timeout policy at this layer; a single failed attempt surfaces
//! immediately and the caller decides what to do.

use std::sync::Arc;

use chrono::{DateTime, Local, Utc};
use tracing::{info, instrument};

use tally_core::Todo;
use tally_llm::{CompletionClient, CompletionRequest};
use tally_notify::{Block, ChatPayload, NotificationSink};

use crate::error::SummarizeError;
use crate::prompt;

/// Fixed sampling temperature for the completion call.
const TEMPERATURE: f64 = 0.7;
/// Fixed cap on generated output, in tokens.
const MAX_OUTPUT_TOKENS: u32 = 500;
/// Label in the chat message's context footer.
const GENERATOR_LABEL: &str = "Todo Summary Assistant";

/// Outcome of a successful run. Ephemeral: returned to the caller, never
/// stored.
#[derive(Clone, Debug)]
pub struct SummaryResult {
    pub summary: String,
    pub delivered_at: DateTime<Utc>,
}

/// Orchestrates one summary request end to end. Holds no cross-request
/// state; concurrent invocations do not interfere.
pub struct Summarizer {
    completion: Arc<dyn CompletionClient>,
    sink: Arc<dyn NotificationSink>,
}

impl Summarizer {
    pub fn new(completion: Arc<dyn CompletionClient>, sink: Arc<dyn NotificationSink>) -> Self {
        Self { completion, sink }
    }

    /// Summarize the given todos and deliver the result to the chat sink.
    ///
    /// Input must be non-empty and every todo must have non-empty content;
    /// both are checked before any outbound call is made.
    #[instrument(skip(self, todos), fields(todo_count = todos.len()))]
    pub async fn summarize(&self, todos: &[Todo]) -> Result<SummaryResult, SummarizeError> {
        if todos.is_empty() {
            return Err(SummarizeError::InvalidInput(
                "no todos provided for summarization".into(),
            ));
        }
        if todos.iter().any(|t| t.content.trim().is_empty()) {
            return Err(SummarizeError::InvalidInput(
                "todo content cannot be empty".into(),
            ));
        }

        let task_list = prompt::render_task_list(todos);

        let request = CompletionRequest {
            system: prompt::SYSTEM_PROMPT.into(),
            user: prompt::build_user_prompt(&task_list),
            temperature: TEMPERATURE,
            max_tokens: MAX_OUTPUT_TOKENS,
        };

        let summary = self
            .completion
            .complete(&request)
            .await
            .map_err(SummarizeError::CompletionUnavailable)?;

        let payload = build_payload(&summary, &task_list, Local::now());

        self.sink
            .deliver(&payload)
            .await
            .map_err(|source| SummarizeError::DeliveryFailed {
                summary: summary.clone(),
                source,
            })?;

        let delivered_at = Utc::now();
        info!(summary_chars = summary.len(), "summary delivered");

        Ok(SummaryResult {
            summary,
            delivered_at,
        })
    }
}

/// Assemble the chat message: header, summary section, divider, the same
/// bulleted task list that went into the prompt, and a context footer.
fn build_payload(summary: &str, task_list: &str, generated_at: DateTime<Local>) -> ChatPayload {
    ChatPayload::new(vec![
        Block::header("📋 Todo Summary"),
        Block::section(format!("*AI-Generated Summary:*\n{summary}")),
        Block::Divider,
        Block::section("*Pending Tasks:*"),
        Block::section(task_list),
        Block::context(format!(
            "Generated by {GENERATOR_LABEL} | {}",
            generated_at.format("%Y-%m-%d %H:%M:%S")
        )),
    ])
}
