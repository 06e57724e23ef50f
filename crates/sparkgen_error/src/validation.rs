//! Input validation errors raised before any network activity.

use derive_more::{Display, Error};

/// Which precondition of a generation request was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ValidationErrorKind {
    /// No credential was supplied, or it was empty.
    #[display("missing credential")]
    MissingCredential,
    /// Instructions were empty or whitespace only.
    #[display("missing instructions")]
    MissingInstructions,
}

/// Validation error with location tracking.
///
/// # Examples
///
/// ```
/// use sparkgen_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::MissingInstructions);
/// assert_eq!(err.kind.to_string(), "missing instructions");
/// ```
#[derive(Debug, Clone, Display, Error)]
#[display("Validation Error: {} at {}:{}", kind, file, line)]
pub struct ValidationError {
    /// The violated precondition.
    pub kind: ValidationErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// File where error occurred.
    pub file: &'static str,
}

impl ValidationError {
    /// Creates a new error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
