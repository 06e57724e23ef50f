//! HTTP client for the Anthropic Messages API.

use super::config::AnthropicConfig;
use super::conversions;
use super::types::AnthropicResponse;
use async_trait::async_trait;
use sparkgen_core::{CompletionRequest, CompletionResponse, Credential};
use sparkgen_error::{AnthropicErrorKind, ModelsError, ModelsResult};
use sparkgen_interface::CompletionDriver;
use tracing::{debug, error, instrument};

/// Anthropic HTTP client.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: reqwest::Client,
    config: AnthropicConfig,
}

impl AnthropicClient {
    /// Creates a new Anthropic client.
    #[instrument(skip(config), fields(model = %config.model(), endpoint = %config.endpoint()))]
    pub fn new(config: AnthropicConfig) -> ModelsResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(*timeout);
        }

        let client = builder.build().map_err(|e| {
            error!(error = ?e, "Failed to build HTTP client");
            ModelsError::new(AnthropicErrorKind::ClientBuild(e.to_string()))
        })?;

        debug!(timeout = ?config.timeout(), "Created Anthropic client");
        Ok(Self { client, config })
    }

    /// Client configuration.
    pub fn config(&self) -> &AnthropicConfig {
        &self.config
    }

    /// Sends one Messages API request and decodes the reply.
    #[instrument(skip(self, credential, request), fields(max_tokens = *request.max_tokens()))]
    pub async fn send(
        &self,
        credential: &Credential,
        request: &CompletionRequest,
    ) -> ModelsResult<AnthropicResponse> {
        let body = conversions::to_anthropic_request(request, self.config.model());
        let url = self.config.messages_url();

        debug!(
            model = %body.model(),
            message_count = body.messages().len(),
            "Sending Anthropic request"
        );

        let response = self
            .client
            .post(&url)
            .header("x-api-key", credential.expose())
            .header("anthropic-version", self.config.api_version())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                ModelsError::new(AnthropicErrorKind::Http(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let kind = conversions::api_error(status, &text);
            error!(status = %status, error = %kind, "Anthropic API error");
            return Err(ModelsError::new(kind));
        }

        let decoded = response.json::<AnthropicResponse>().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            ModelsError::new(AnthropicErrorKind::Parse(e.to_string()))
        })?;

        debug!(
            id = %decoded.id(),
            stop_reason = ?decoded.stop_reason(),
            input_tokens = decoded.usage().as_ref().map(|u| *u.input_tokens()),
            output_tokens = decoded.usage().as_ref().map(|u| *u.output_tokens()),
            blocks = decoded.content().len(),
            "Received Anthropic response"
        );

        Ok(decoded)
    }
}

#[async_trait]
impl CompletionDriver for AnthropicClient {
    async fn complete(
        &self,
        credential: &Credential,
        request: &CompletionRequest,
    ) -> ModelsResult<CompletionResponse> {
        let response = self.send(credential, request).await?;
        conversions::from_anthropic_response(&response)
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}
