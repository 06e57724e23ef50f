//! Anthropic Messages API request and response types.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Anthropic API request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), pattern = "owned")]
pub struct AnthropicRequest {
    /// Model identifier
    model: String,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// Optional system prompt
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    /// List of messages
    messages: Vec<AnthropicMessage>,
}

impl AnthropicRequest {
    /// Creates a request from its parts.
    pub fn new(
        model: String,
        max_tokens: u32,
        system: Option<String>,
        messages: Vec<AnthropicMessage>,
    ) -> Self {
        Self {
            model,
            max_tokens,
            system,
            messages,
        }
    }

    /// Creates a builder for `AnthropicRequest`.
    pub fn builder() -> AnthropicRequestBuilder {
        AnthropicRequestBuilder::default()
    }
}

/// Anthropic message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AnthropicMessage {
    /// Role of the message sender
    role: String,
    /// Content blocks
    content: Vec<AnthropicContentBlock>,
}

impl AnthropicMessage {
    /// Creates a message holding a single text block.
    pub fn text(role: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: vec![AnthropicContentBlock::Text { text: text.into() }],
        }
    }
}

/// Content block in a request message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnthropicContentBlock {
    /// Text content
    Text {
        /// Text content
        text: String,
    },
}

/// Anthropic API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct AnthropicResponse {
    /// Response ID
    id: String,
    /// Response type
    #[serde(rename = "type")]
    response_type: String,
    /// Role (should be "assistant")
    role: String,
    /// Content blocks
    content: Vec<AnthropicResponseBlock>,
    /// Model used
    model: String,
    /// Stop reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stop_reason: Option<String>,
    /// Usage information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    usage: Option<AnthropicUsage>,
}

impl AnthropicResponse {
    /// Text of every text block, in order. Other block kinds are skipped.
    pub fn text_segments(&self) -> Vec<String> {
        self.content
            .iter()
            .filter_map(|block| match block {
                AnthropicResponseBlock::Text { text } => Some(text.clone()),
                AnthropicResponseBlock::Other => None,
            })
            .collect()
    }
}

/// Content block in a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnthropicResponseBlock {
    /// Text content
    Text {
        /// Text content
        text: String,
    },
    /// Tool use, thinking, or any block kind this client does not read
    #[serde(other)]
    Other,
}

/// Usage information from Anthropic API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AnthropicUsage {
    /// Input tokens
    input_tokens: u32,
    /// Output tokens
    output_tokens: u32,
}

/// Error body returned with non-success statuses.
///
/// `{"type":"error","error":{"type":"authentication_error","message":"invalid x-api-key"}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AnthropicErrorEnvelope {
    /// Always "error"
    #[serde(rename = "type")]
    envelope_type: String,
    /// Error details
    error: AnthropicErrorBody,
}

/// Details inside an [`AnthropicErrorEnvelope`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AnthropicErrorBody {
    /// Error category, e.g. "authentication_error"
    #[serde(rename = "type")]
    error_type: String,
    /// Human-readable message
    message: String,
}
