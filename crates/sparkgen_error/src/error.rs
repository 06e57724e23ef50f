//! Top-level error for configuration and command-line plumbing.

use crate::{ConfigError, GenerationError, ModelsError, ValidationError};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum SparkgenErrorKind {
    /// Configuration error
    Config(ConfigError),
    /// Input validation error
    Validation(ValidationError),
    /// Provider error
    Models(ModelsError),
    /// Terminal or file I/O error
    Io(std::io::Error),
}

impl std::fmt::Display for SparkgenErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SparkgenErrorKind::Config(e) => write!(f, "{}", e),
            SparkgenErrorKind::Validation(e) => write!(f, "{}", e),
            SparkgenErrorKind::Models(e) => write!(f, "{}", e),
            SparkgenErrorKind::Io(e) => write!(f, "I/O Error: {}", e),
        }
    }
}

impl From<GenerationError> for SparkgenErrorKind {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::Validation(e) => SparkgenErrorKind::Validation(e),
            GenerationError::Models(e) => SparkgenErrorKind::Models(e),
        }
    }
}

/// Sparkgen error with kind discrimination.
#[derive(Debug)]
pub struct SparkgenError(Box<SparkgenErrorKind>);

impl SparkgenError {
    /// Create a new error from a kind.
    pub fn new(kind: SparkgenErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SparkgenErrorKind {
        &self.0
    }
}

impl std::fmt::Display for SparkgenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sparkgen Error: {}", self.0)
    }
}

impl std::error::Error for SparkgenError {}

impl<T> From<T> for SparkgenError
where
    T: Into<SparkgenErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for sparkgen operations.
pub type SparkgenResult<T> = std::result::Result<T, SparkgenError>;
