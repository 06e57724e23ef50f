use sparkgen_core::{
    CompletionRequest, Credential, GenerationSettings, Message, SYSTEM_PROMPT,
    build_completion_request,
};
use sparkgen_error::{AnthropicErrorKind, ModelsErrorKind};
use sparkgen_interface::CompletionDriver;
use sparkgen_models::{
    AnthropicClient, AnthropicConfig, AnthropicErrorEnvelope, AnthropicMessage,
    AnthropicRequest, AnthropicResponse, AnthropicResponseBlock, DEFAULT_API_VERSION,
    DEFAULT_ENDPOINT,
};
use std::time::Duration;

fn unreachable_client() -> AnthropicClient {
    // Port 1 is never listening, so connects are refused immediately.
    let config = AnthropicConfig::builder()
        .endpoint("http://127.0.0.1:1")
        .timeout(Some(Duration::from_secs(5)))
        .build()
        .expect("Valid config");
    AnthropicClient::new(config).expect("Client builds")
}

#[test]
fn test_config_defaults() {
    let config = AnthropicConfig::default();
    assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
    assert_eq!(config.api_version(), DEFAULT_API_VERSION);
    assert_eq!(config.model(), "claude-sonnet-4-20250514");
    assert_eq!(config.timeout(), &None);
    assert_eq!(
        config.messages_url(),
        "https://api.anthropic.com/v1/messages"
    );
}

#[test]
fn test_messages_url_tolerates_trailing_slash() {
    let config = AnthropicConfig::builder()
        .endpoint("http://localhost:8080/")
        .build()
        .expect("Valid config");
    assert_eq!(config.messages_url(), "http://localhost:8080/v1/messages");
}

#[test]
fn test_request_wire_shape() {
    let request = AnthropicRequest::builder()
        .model("claude-sonnet-4-20250514")
        .max_tokens(2000u32)
        .system(Some("be terse".to_string()))
        .messages(vec![AnthropicMessage::text("user", "Select id")])
        .build()
        .expect("Valid request");

    let json = serde_json::to_value(&request).expect("Serializes");
    assert_eq!(
        json,
        serde_json::json!({
            "model": "claude-sonnet-4-20250514",
            "max_tokens": 2000,
            "system": "be terse",
            "messages": [
                {"role": "user", "content": [{"type": "text", "text": "Select id"}]}
            ]
        })
    );
}

#[test]
fn test_request_without_system_omits_field() {
    let request = AnthropicRequest::new(
        "m".to_string(),
        10,
        None,
        vec![AnthropicMessage::text("user", "hi")],
    );
    let json = serde_json::to_value(&request).expect("Serializes");
    assert!(json.get("system").is_none());
}

#[test]
fn test_response_decodes_text_and_skips_other_blocks() {
    let body = r#"{
        "id": "msg_01",
        "type": "message",
        "role": "assistant",
        "content": [
            {"type": "thinking", "thinking": "hmm", "signature": "x"},
            {"type": "text", "text": "df.select(\"id\")"}
        ],
        "model": "claude-sonnet-4-20250514",
        "stop_reason": "end_turn",
        "stop_sequence": null,
        "usage": {"input_tokens": 412, "output_tokens": 9}
    }"#;

    let response: AnthropicResponse = serde_json::from_str(body).expect("Decodes");
    assert_eq!(response.content().len(), 2);
    assert_eq!(response.content()[0], AnthropicResponseBlock::Other);
    assert_eq!(response.text_segments(), vec!["df.select(\"id\")".to_string()]);
    assert_eq!(response.stop_reason().as_deref(), Some("end_turn"));
    let usage = response.usage().as_ref().expect("usage present");
    assert_eq!(*usage.output_tokens(), 9);
}

#[test]
fn test_error_envelope_decodes() {
    let body = r#"{"type":"error","error":{"type":"authentication_error","message":"invalid x-api-key"}}"#;
    let envelope: AnthropicErrorEnvelope = serde_json::from_str(body).expect("Decodes");
    assert_eq!(envelope.error().error_type(), "authentication_error");
    assert_eq!(envelope.error().message(), "invalid x-api-key");
}

#[test]
fn test_completion_request_carries_prompt_and_cap() {
    let request = build_completion_request("Group by diagnosis", &GenerationSettings::default());
    assert_eq!(request.system(), SYSTEM_PROMPT);
    assert_eq!(*request.max_tokens(), 2000);
    assert_eq!(request.messages().len(), 1);
}

#[tokio::test]
async fn test_connection_refused_is_http_error() {
    let client = unreachable_client();
    let request = CompletionRequest::new(
        None,
        16,
        "system".to_string(),
        vec![Message::user("Select id")],
    );

    let err = client
        .complete(&Credential::new("sk-test"), &request)
        .await
        .expect_err("nothing listens on port 1");

    assert!(
        matches!(err.kind, ModelsErrorKind::Anthropic(AnthropicErrorKind::Http(_))),
        "got {:?}",
        err.kind
    );
    assert!(!err.kind.to_string().is_empty());
}

#[test]
fn test_driver_names() {
    let client = AnthropicClient::new(AnthropicConfig::default()).expect("Client builds");
    assert_eq!(client.provider_name(), "anthropic");
    assert_eq!(client.model_name(), "claude-sonnet-4-20250514");
}
