//! Errors raised by LLM provider clients.

use derive_more::{Display, Error};

/// Anthropic-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum AnthropicErrorKind {
    /// The HTTP client could not be constructed.
    #[display("Failed to create Anthropic client: {}", _0)]
    ClientBuild(String),
    /// The request could not be sent or the response body could not be read.
    #[display("Anthropic request failed: {}", _0)]
    Http(String),
    /// The API answered with a non-success status.
    #[display("Anthropic API error ({}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message reported by the API, or the raw body
        message: String,
    },
    /// The response body was not a valid Messages API payload.
    #[display("Failed to parse Anthropic response: {}", _0)]
    Parse(String),
    /// The response carried no text content.
    #[display("Anthropic response contained no text content")]
    EmptyResponse,
}

impl AnthropicErrorKind {
    /// HTTP status attached to this error, if the API produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            AnthropicErrorKind::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the API rejected the credential.
    pub fn is_authentication(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

/// Provider-level error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum ModelsErrorKind {
    /// Error from the Anthropic Messages API.
    #[display("{}", _0)]
    Anthropic(AnthropicErrorKind),
    /// A driver answered without any text segment.
    #[display("Provider returned no text content")]
    EmptyResponse,
}

impl From<AnthropicErrorKind> for ModelsErrorKind {
    fn from(kind: AnthropicErrorKind) -> Self {
        ModelsErrorKind::Anthropic(kind)
    }
}

/// Models error with location tracking.
///
/// # Examples
///
/// ```
/// use sparkgen_error::{AnthropicErrorKind, ModelsError, ModelsErrorKind};
///
/// let err = ModelsError::new(ModelsErrorKind::Anthropic(AnthropicErrorKind::Api {
///     status: 401,
///     message: "invalid x-api-key".to_string(),
/// }));
/// assert_eq!(err.kind.to_string(), "Anthropic API error (401): invalid x-api-key");
/// ```
#[derive(Debug, Clone, Display, Error)]
#[display("Models Error: {} at {}:{}", kind, file, line)]
pub struct ModelsError {
    /// The specific error kind.
    pub kind: ModelsErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// File where error occurred.
    pub file: &'static str,
}

impl ModelsError {
    /// Creates a new error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: impl Into<ModelsErrorKind>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind: kind.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for provider operations.
pub type ModelsResult<T> = Result<T, ModelsError>;
