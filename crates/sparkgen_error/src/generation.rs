//! Errors that end a single code-generation invocation.

use crate::{ModelsError, ValidationError};
use derive_more::{Display, From};

/// Everything that can stop one generation: a rejected input or a failed call.
#[derive(Debug, Clone, Display, From)]
pub enum GenerationError {
    /// Input rejected before any network activity.
    #[display("{}", _0)]
    Validation(ValidationError),
    /// Transport, authentication, or response failure.
    #[display("{}", _0)]
    Models(ModelsError),
}

impl GenerationError {
    /// Human-readable message for display, without source location.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparkgen_error::{GenerationError, ValidationError, ValidationErrorKind};
    ///
    /// let err: GenerationError =
    ///     ValidationError::new(ValidationErrorKind::MissingCredential).into();
    /// assert_eq!(err.user_message(), "missing credential");
    /// ```
    pub fn user_message(&self) -> String {
        match self {
            GenerationError::Validation(e) => e.kind.to_string(),
            GenerationError::Models(e) => e.kind.to_string(),
        }
    }

    /// True when the error was raised locally, before any call was made.
    pub fn is_validation(&self) -> bool {
        matches!(self, GenerationError::Validation(_))
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerationError::Validation(e) => Some(e),
            GenerationError::Models(e) => Some(e),
        }
    }
}

/// Maps a generation outcome into its display message.
pub trait GenerationResultExt<T> {
    /// Replaces the error with [`GenerationError::user_message`].
    fn map_user_message(self) -> Result<T, String>;
}

impl<T> GenerationResultExt<T> for Result<T, GenerationError> {
    fn map_user_message(self) -> Result<T, String> {
        self.map_err(|e| e.user_message())
    }
}
