//! The per-trigger generation request.

use crate::Credential;
use derive_getters::Getters;
use sparkgen_error::{ValidationError, ValidationErrorKind};

/// Credential and instructions collected from the form for one trigger.
///
/// Built fresh on every submission and dropped once the handler returns.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GenerationRequest {
    /// Secret authenticating the outbound call
    #[builder(default)]
    credential: Credential,
    /// Free-text description of the transformation
    #[builder(default)]
    instructions: String,
}

impl GenerationRequest {
    /// Creates a request from its two inputs.
    pub fn new(credential: impl Into<Credential>, instructions: impl Into<String>) -> Self {
        Self {
            credential: credential.into(),
            instructions: instructions.into(),
        }
    }

    /// Creates a builder for GenerationRequest.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// Checks the preconditions that must hold before any network call.
    ///
    /// The credential is checked first, then the trimmed instructions.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.credential.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::MissingCredential));
        }
        if self.instructions.trim().is_empty() {
            return Err(ValidationError::new(
                ValidationErrorKind::MissingInstructions,
            ));
        }
        Ok(())
    }
}
