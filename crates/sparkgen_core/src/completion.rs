//! Provider-neutral completion request and response.

use crate::Role;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct Message {
    role: Role,
    text: String,
}

impl Message {
    /// Creates a builder for Message.
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }

    /// Creates a user-role message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }
}

/// One chat-completion call: system instruction, messages, and output cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct CompletionRequest {
    /// Model override; the driver's configured model is used when `None`
    #[builder(default)]
    model: Option<String>,
    /// Upper bound on generated tokens
    max_tokens: u32,
    /// System-role instruction
    system: String,
    /// Conversation messages, in order
    messages: Vec<Message>,
}

impl CompletionRequest {
    /// Creates a request from its parts.
    pub fn new(
        model: Option<String>,
        max_tokens: u32,
        system: String,
        messages: Vec<Message>,
    ) -> Self {
        Self {
            model,
            max_tokens,
            system,
            messages,
        }
    }

    /// Creates a builder for CompletionRequest.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }
}

/// Text segments returned by the provider, in response order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct CompletionResponse {
    segments: Vec<String>,
}

impl CompletionResponse {
    /// Wraps the text segments of a response.
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// Convenience constructor for a single-segment response.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            segments: vec![text.into()],
        }
    }

    /// The first text segment, which carries the generated code.
    pub fn first_segment(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }
}
