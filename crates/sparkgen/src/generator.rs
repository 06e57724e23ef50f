//! The code-generation request handler.

use sparkgen_core::{
    Credential, GenerationRequest, GenerationResult, GenerationSettings, GenerationState,
    build_completion_request, extract_code,
};
use sparkgen_error::{GenerationError, GenerationResultExt, ModelsError, ModelsErrorKind};
use sparkgen_interface::CompletionDriver;
use tracing::{debug, info, instrument};

/// Turns instructions into PySpark code through a completion driver.
///
/// The handler holds no per-invocation state: each call builds its own request
/// and consumes its own response. Inputs are validated before any network
/// activity, and a valid call reaches the driver exactly once.
#[derive(Debug, Clone)]
pub struct CodeGenerator<D> {
    driver: D,
    credential: Credential,
    settings: GenerationSettings,
}

impl<D: CompletionDriver> CodeGenerator<D> {
    /// Creates a handler that authenticates every call with `credential`.
    pub fn new(driver: D, credential: impl Into<Credential>) -> Self {
        Self {
            driver,
            credential: credential.into(),
            settings: GenerationSettings::default(),
        }
    }

    /// Replaces the model override and output cap.
    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    /// The underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Settings applied to each request.
    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// False when submissions will be rejected for a missing credential.
    pub fn has_credential(&self) -> bool {
        !self.credential.is_empty()
    }

    /// Generates code for `instructions` using the handler's credential.
    pub async fn generate(&self, instructions: &str) -> GenerationResult {
        self.generate_observed(instructions, |_| {}).await
    }

    /// Like [`generate`](Self::generate), reporting each state transition.
    ///
    /// `observer` sees `InFlight` just before the upstream call (valid input
    /// only) and always ends with `Done`.
    pub async fn generate_observed<F>(&self, instructions: &str, observer: F) -> GenerationResult
    where
        F: FnMut(&GenerationState),
    {
        let request = GenerationRequest::new(self.credential.clone(), instructions);
        self.handle_observed(&request, observer).await
    }

    /// Handles an explicit request, using its own credential.
    pub async fn handle(&self, request: &GenerationRequest) -> GenerationResult {
        self.handle_observed(request, |_| {}).await
    }

    /// Handles an explicit request, reporting each state transition.
    #[instrument(
        skip_all,
        fields(
            provider = self.driver.provider_name(),
            model = self.driver.model_name(),
            instructions_len = request.instructions().len(),
        )
    )]
    pub async fn handle_observed<F>(
        &self,
        request: &GenerationRequest,
        mut observer: F,
    ) -> GenerationResult
    where
        F: FnMut(&GenerationState),
    {
        let outcome = match request.validate() {
            Ok(()) => {
                observer(&GenerationState::InFlight);
                self.call(request).await
            }
            Err(e) => Err(GenerationError::from(e)),
        };

        match &outcome {
            Ok(code) => info!(code_len = code.len(), "Code generated"),
            Err(e) if e.is_validation() => debug!(error = %e.user_message(), "Request rejected"),
            Err(e) => info!(error = %e, "Generation failed"),
        }

        let result = GenerationResult::from(outcome.map_user_message());
        observer(&GenerationState::Done(result.clone()));
        result
    }

    /// Validates and runs `request`, returning typed errors.
    pub async fn try_generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        request.validate()?;
        self.call(request).await
    }

    async fn call(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let completion = build_completion_request(request.instructions(), &self.settings);
        debug!(max_tokens = *completion.max_tokens(), "Dispatching completion");

        let response = self
            .driver
            .complete(request.credential(), &completion)
            .await?;

        debug!(segments = response.segments().len(), "Completion received");
        extract_code(&response)
            .ok_or_else(|| ModelsError::new(ModelsErrorKind::EmptyResponse).into())
    }
}
