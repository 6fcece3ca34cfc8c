//! Typed Slack Block Kit payload.
//!
//! Only the block types the summary message uses: header, section, divider,
//! context.

use serde::{Deserialize, Serialize};

/// A Block Kit text object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    PlainText {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        emoji: Option<bool>,
    },
    Mrkdwn {
        text: String,
    },
}

impl TextObject {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText {
            text: text.into(),
            emoji: Some(true),
        }
    }

    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self::Mrkdwn { text: text.into() }
    }
}

/// A Block Kit layout block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Header { text: TextObject },
    Section { text: TextObject },
    Divider,
    Context { elements: Vec<TextObject> },
}

impl Block {
    pub fn header(text: impl Into<String>) -> Self {
        Self::Header {
            text: TextObject::plain(text),
        }
    }

    pub fn section(text: impl Into<String>) -> Self {
        Self::Section {
            text: TextObject::mrkdwn(text),
        }
    }

    pub fn context(text: impl Into<String>) -> Self {
        Self::Context {
            elements: vec![TextObject::mrkdwn(text)],
        }
    }
}

/// The message payload posted to the webhook. Constructed once per request,
/// never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatPayload {
    pub blocks: Vec<Block>,
}

impl ChatPayload {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_serializes_as_plain_text() {
        let block = Block::header("📋 Todo Summary");
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "header");
        assert_eq!(json["text"]["type"], "plain_text");
        assert_eq!(json["text"]["text"], "📋 Todo Summary");
        assert_eq!(json["text"]["emoji"], true);
    }

    #[test]
    fn section_serializes_as_mrkdwn() {
        let block = Block::section("*Pending Tasks:*");
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "section");
        assert_eq!(json["text"]["type"], "mrkdwn");
        assert_eq!(json["text"]["text"], "*Pending Tasks:*");
    }

    #[test]
    fn divider_is_bare() {
        let json = serde_json::to_value(Block::Divider).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "divider" }));
    }

    #[test]
    fn context_wraps_elements() {
        let block = Block::context("Generated by Todo Summary Assistant | now");
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "context");
        assert_eq!(json["elements"][0]["type"], "mrkdwn");
    }

    #[test]
    fn payload_top_level_shape() {
        let payload = ChatPayload::new(vec![Block::header("t"), Block::Divider]);
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["blocks"].is_array());
        assert_eq!(json["blocks"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn payload_serde_roundtrip() {
        let payload = ChatPayload::new(vec![
            Block::header("📋 Todo Summary"),
            Block::section("summary text"),
            Block::Divider,
            Block::context("footer"),
        ]);
        let json = serde_json::to_string(&payload).unwrap();
        let back: ChatPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(payload, back);
    }
}
