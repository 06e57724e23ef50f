mod client;
mod config;
mod conversions;
mod types;

pub use client::AnthropicClient;
pub use config::{
    ANTHROPIC_API_KEY_VAR, AnthropicConfig, AnthropicConfigBuilder, DEFAULT_API_VERSION,
    DEFAULT_ENDPOINT,
};
pub use types::{
    AnthropicContentBlock, AnthropicErrorBody, AnthropicErrorEnvelope, AnthropicMessage,
    AnthropicRequest, AnthropicResponse, AnthropicResponseBlock, AnthropicUsage,
};
