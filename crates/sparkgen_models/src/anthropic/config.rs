//! Anthropic client configuration.

use derive_getters::Getters;
use sparkgen_core::DEFAULT_MODEL;
use std::time::Duration;

/// Base URL of the hosted Messages API.
pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com";

/// Value sent in the `anthropic-version` header.
pub const DEFAULT_API_VERSION: &str = "2023-06-01";

/// Environment variable holding the API key.
pub const ANTHROPIC_API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

/// Anthropic API configuration.
///
/// Holds no API key; the credential arrives with each call.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct AnthropicConfig {
    #[builder(default = "DEFAULT_ENDPOINT.to_string()")]
    endpoint: String,
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    #[builder(default = "DEFAULT_API_VERSION.to_string()")]
    api_version: String,
    /// Whole-request timeout; `None` leaves reqwest's default (no timeout)
    #[builder(default)]
    timeout: Option<Duration>,
}

impl AnthropicConfig {
    /// Creates a builder for AnthropicConfig.
    pub fn builder() -> AnthropicConfigBuilder {
        AnthropicConfigBuilder::default()
    }

    /// URL of the messages endpoint.
    pub fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.endpoint.trim_end_matches('/'))
    }
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: None,
        }
    }
}
