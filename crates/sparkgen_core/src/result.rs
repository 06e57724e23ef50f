//! Generation outcome and the handler's interaction states.

use serde::{Deserialize, Serialize};

/// Outcome of one triggered generation, consumed once by the display layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum GenerationResult {
    /// Cleaned code ready for display.
    Success(String),
    /// Human-readable description of what went wrong.
    Failure(String),
}

impl GenerationResult {
    /// True for [`GenerationResult::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationResult::Success(_))
    }

    /// The code on success.
    pub fn code(&self) -> Option<&str> {
        match self {
            GenerationResult::Success(code) => Some(code),
            GenerationResult::Failure(_) => None,
        }
    }

    /// The message on failure.
    pub fn message(&self) -> Option<&str> {
        match self {
            GenerationResult::Success(_) => None,
            GenerationResult::Failure(message) => Some(message),
        }
    }

    /// Converts into a standard `Result`.
    pub fn into_result(self) -> Result<String, String> {
        match self {
            GenerationResult::Success(code) => Ok(code),
            GenerationResult::Failure(message) => Err(message),
        }
    }
}

impl From<Result<String, String>> for GenerationResult {
    fn from(result: Result<String, String>) -> Self {
        match result {
            Ok(code) => GenerationResult::Success(code),
            Err(message) => GenerationResult::Failure(message),
        }
    }
}

/// Where a single interaction currently stands.
///
/// `Idle` moves to `InFlight` when a valid request is sent, or straight to
/// `Done` when validation fails. `InFlight` always ends in `Done`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenerationState {
    /// Waiting for a trigger.
    #[default]
    Idle,
    /// Request sent, caller blocked until it resolves.
    InFlight,
    /// Terminal state holding the outcome.
    Done(GenerationResult),
}

impl GenerationState {
    /// True while a request is outstanding.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, GenerationState::InFlight)
    }

    /// The outcome once the interaction has finished.
    pub fn result(&self) -> Option<&GenerationResult> {
        match self {
            GenerationState::Done(result) => Some(result),
            _ => None,
        }
    }
}
