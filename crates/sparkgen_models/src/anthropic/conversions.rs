//! Conversions between sparkgen's neutral types and Anthropic's wire types.

use super::types::{AnthropicErrorEnvelope, AnthropicMessage, AnthropicRequest, AnthropicResponse};
use sparkgen_core::{CompletionRequest, CompletionResponse};
use sparkgen_error::{AnthropicErrorKind, ModelsError, ModelsResult};

/// Builds the Messages API body, falling back to `default_model`.
pub(crate) fn to_anthropic_request(
    request: &CompletionRequest,
    default_model: &str,
) -> AnthropicRequest {
    let model = request
        .model()
        .clone()
        .unwrap_or_else(|| default_model.to_string());

    let messages = request
        .messages()
        .iter()
        .map(|m| AnthropicMessage::text(m.role().to_string(), m.text().clone()))
        .collect();

    let system = Some(request.system().clone()).filter(|s| !s.is_empty());

    AnthropicRequest::new(model, *request.max_tokens(), system, messages)
}

/// Collects the text blocks of a response; no text at all is an error.
pub(crate) fn from_anthropic_response(
    response: &AnthropicResponse,
) -> ModelsResult<CompletionResponse> {
    let segments = response.text_segments();
    if segments.is_empty() {
        return Err(ModelsError::new(AnthropicErrorKind::EmptyResponse));
    }
    Ok(CompletionResponse::new(segments))
}

/// Turns a non-success status and its body into an error kind.
///
/// The API's own message is preferred; an unrecognised body is passed through,
/// and an empty one falls back to the status reason.
pub(crate) fn api_error(status: reqwest::StatusCode, body: &str) -> AnthropicErrorKind {
    let message = match serde_json::from_str::<AnthropicErrorEnvelope>(body) {
        Ok(envelope) => envelope.error().message().clone(),
        Err(_) if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
        Err(_) => body.trim().to_string(),
    };

    AnthropicErrorKind::Api {
        status: status.as_u16(),
        message,
    }
}
