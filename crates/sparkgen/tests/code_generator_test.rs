use async_trait::async_trait;
use sparkgen::{
    AnthropicClient, AnthropicConfig, CodeGenerator, CompletionDriver, CompletionRequest,
    CompletionResponse, Credential, GenerationRequest, GenerationResult, GenerationSettings,
    GenerationState, ModelsError, SYSTEM_PROMPT,
};
use sparkgen_error::{AnthropicErrorKind, ModelsResult, ValidationErrorKind};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// What the mock driver answers with.
#[derive(Clone)]
enum MockBehavior {
    Reply(Vec<String>),
    Fail(AnthropicErrorKind),
}

/// Mock driver that records every call it receives.
struct MockDriver {
    behavior: MockBehavior,
    calls: AtomicUsize,
    last_request: Mutex<Option<(Credential, CompletionRequest)>>,
}

impl MockDriver {
    fn replying(text: &str) -> Arc<Self> {
        Self::with_behavior(MockBehavior::Reply(vec![text.to_string()]))
    }

    fn with_behavior(behavior: MockBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last_request(&self) -> Option<(Credential, CompletionRequest)> {
        self.last_request.lock().expect("lock").clone()
    }
}

#[async_trait]
impl CompletionDriver for MockDriver {
    async fn complete(
        &self,
        credential: &Credential,
        request: &CompletionRequest,
    ) -> ModelsResult<CompletionResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().expect("lock") = Some((credential.clone(), request.clone()));
        match &self.behavior {
            MockBehavior::Reply(segments) => Ok(CompletionResponse::new(segments.clone())),
            MockBehavior::Fail(kind) => Err(ModelsError::new(kind.clone())),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model-v1"
    }
}

#[tokio::test]
async fn test_fenced_reply_is_cleaned() {
    let driver = MockDriver::replying("```python\ndf.filter(f.col(\"age\") > 65)\n```");
    let generator = CodeGenerator::new(driver.clone(), "sk-test");

    let result = generator.generate("Filter patients where age > 65").await;

    assert_eq!(
        result,
        GenerationResult::Success("df.filter(f.col(\"age\") > 65)".to_string())
    );
    assert_eq!(driver.calls(), 1);
}

#[tokio::test]
async fn test_unfenced_reply_unchanged() {
    let driver = MockDriver::replying("df.select(\"id\")");
    let generator = CodeGenerator::new(driver.clone(), "sk-test");

    let result = generator.generate("Select id").await;

    assert_eq!(result.code(), Some("df.select(\"id\")"));
}

#[tokio::test]
async fn test_blank_instructions_make_no_call() {
    let driver = MockDriver::replying("df");
    let generator = CodeGenerator::new(driver.clone(), "sk-test");

    for blank in ["", "   ", "\n\t\n"] {
        let result = generator.generate(blank).await;
        assert_eq!(
            result,
            GenerationResult::Failure("missing instructions".to_string())
        );
    }
    assert_eq!(driver.calls(), 0);
}

#[tokio::test]
async fn test_empty_credential_makes_no_call() {
    let driver = MockDriver::replying("df");
    let generator = CodeGenerator::new(driver.clone(), Credential::default());

    assert!(!generator.has_credential());
    let result = generator.generate("Select id").await;

    assert_eq!(
        result,
        GenerationResult::Failure("missing credential".to_string())
    );
    assert_eq!(driver.calls(), 0);
}

#[tokio::test]
async fn test_one_call_per_valid_trigger() {
    let driver = MockDriver::replying("df.count()");
    let generator = CodeGenerator::new(driver.clone(), "sk-test");

    generator.generate("Count rows").await;
    generator.generate("").await;
    generator.generate("Count distinct ids").await;

    assert_eq!(driver.calls(), 2);
}

#[tokio::test]
async fn test_request_shape_reaches_driver() {
    let driver = MockDriver::replying("df");
    let settings = GenerationSettings::builder()
        .max_tokens(256u32)
        .build()
        .expect("Valid settings");
    let generator = CodeGenerator::new(driver.clone(), "sk-test").with_settings(settings);

    generator.generate("Group by diagnosis and count").await;

    let (credential, request) = driver.last_request().expect("driver was called");
    assert_eq!(credential.expose(), "sk-test");
    assert_eq!(request.system(), SYSTEM_PROMPT);
    assert_eq!(*request.max_tokens(), 256);
    assert_eq!(request.messages().len(), 1);
    assert!(request.messages()[0].text().contains("Group by diagnosis and count"));
    assert!(request.messages()[0].text().contains("Output ONLY raw Python code"));
}

#[tokio::test]
async fn test_handle_uses_request_credential() {
    let driver = MockDriver::replying("df");
    let generator = CodeGenerator::new(driver.clone(), Credential::default());

    let result = generator
        .handle(&GenerationRequest::new("sk-explicit", "Select id"))
        .await;

    assert!(result.is_success());
    let (credential, _) = driver.last_request().expect("driver was called");
    assert_eq!(credential.expose(), "sk-explicit");
}

#[tokio::test]
async fn test_driver_error_becomes_failure() {
    let driver = MockDriver::with_behavior(MockBehavior::Fail(AnthropicErrorKind::Api {
        status: 401,
        message: "invalid x-api-key".to_string(),
    }));
    let generator = CodeGenerator::new(driver.clone(), "sk-bad");

    let result = generator.generate("Select id").await;

    assert_eq!(
        result,
        GenerationResult::Failure("Anthropic API error (401): invalid x-api-key".to_string())
    );
    assert_eq!(driver.calls(), 1);
}

#[tokio::test]
async fn test_empty_reply_is_failure() {
    let driver = MockDriver::with_behavior(MockBehavior::Reply(Vec::new()));
    let generator = CodeGenerator::new(driver.clone(), "sk-test");

    let result = generator.generate("Select id").await;

    assert_eq!(
        result.message(),
        Some("Provider returned no text content")
    );
}

#[tokio::test]
async fn test_try_generate_returns_typed_errors() {
    let driver = MockDriver::replying("df");
    let generator = CodeGenerator::new(driver.clone(), "sk-test");

    let err = generator
        .try_generate(&GenerationRequest::new("sk-test", " "))
        .await
        .expect_err("blank instructions");
    assert!(err.is_validation());
    match err {
        sparkgen::GenerationError::Validation(e) => {
            assert_eq!(e.kind, ValidationErrorKind::MissingInstructions)
        }
        other => panic!("unexpected error: {other}"),
    }

    let code = generator
        .try_generate(&GenerationRequest::new("sk-test", "Select id"))
        .await
        .expect("valid request");
    assert_eq!(code, "df");
}

#[tokio::test]
async fn test_valid_trigger_passes_through_in_flight() {
    let driver = MockDriver::replying("df.count()");
    let generator = CodeGenerator::new(driver.clone(), "sk-test");
    let mut states = Vec::new();

    let result = generator
        .generate_observed("Count rows", |state| states.push(state.clone()))
        .await;

    assert_eq!(
        states,
        vec![GenerationState::InFlight, GenerationState::Done(result)]
    );
}

#[tokio::test]
async fn test_invalid_trigger_goes_straight_to_done() {
    let driver = MockDriver::replying("df");
    let generator = CodeGenerator::new(driver.clone(), "sk-test");
    let mut states = Vec::new();

    generator
        .generate_observed("  ", |state| states.push(state.clone()))
        .await;

    assert_eq!(
        states,
        vec![GenerationState::Done(GenerationResult::Failure(
            "missing instructions".to_string()
        ))]
    );
}

#[tokio::test]
async fn test_connection_refused_is_reported() {
    let config = AnthropicConfig::builder()
        .endpoint("http://127.0.0.1:1")
        .timeout(Some(Duration::from_secs(5)))
        .build()
        .expect("Valid config");
    let client = AnthropicClient::new(config).expect("Client builds");
    let generator = CodeGenerator::new(client, "sk-test");

    let result = generator.generate("Select id").await;

    let message = result.message().expect("failure expected");
    assert!(message.starts_with("Anthropic request failed"), "{message}");
}

/// Shared in-memory sink for captured log output.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("lock")).into_owned()
    }
}

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().expect("lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_failures_not_logged_at_warn_level() {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let generator = CodeGenerator::new(MockDriver::replying("df"), "");
    let rejected = generator.generate("Select id").await;
    assert!(!rejected.is_success());

    let failing = MockDriver::with_behavior(MockBehavior::Fail(AnthropicErrorKind::Api {
        status: 500,
        message: "overloaded".to_string(),
    }));
    let failed = CodeGenerator::new(failing, "sk-test").generate("Select id").await;
    assert!(!failed.is_success());

    tracing::warn!("capture check");
    let logged = buffer.contents();
    assert!(logged.contains("capture check"), "{logged}");
    assert!(!logged.contains("Request rejected"), "{logged}");
    assert!(!logged.contains("Generation failed"), "{logged}");
}
