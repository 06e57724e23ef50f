//! LLM provider integrations for sparkgen.
//!
//! Each provider implements [`sparkgen_interface::CompletionDriver`]. Only the
//! Anthropic Messages API is supported today.

mod anthropic;

pub use anthropic::{
    ANTHROPIC_API_KEY_VAR, AnthropicClient, AnthropicConfig, AnthropicConfigBuilder,
    AnthropicContentBlock, AnthropicErrorBody, AnthropicErrorEnvelope, AnthropicMessage,
    AnthropicRequest, AnthropicResponse, AnthropicResponseBlock, AnthropicUsage,
    DEFAULT_API_VERSION, DEFAULT_ENDPOINT,
};
