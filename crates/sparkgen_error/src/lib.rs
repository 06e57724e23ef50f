//! Error types for sparkgen.
//!
//! Every error struct records the source location where it was created, so a
//! log line points straight at the failing call site. The user-facing message
//! of an error is the display of its *kind*, which carries no location.

mod config;
mod error;
mod generation;
mod models;
mod validation;

pub use config::ConfigError;
pub use error::{SparkgenError, SparkgenErrorKind, SparkgenResult};
pub use generation::{GenerationError, GenerationResultExt};
pub use models::{AnthropicErrorKind, ModelsError, ModelsErrorKind, ModelsResult};
pub use validation::{ValidationError, ValidationErrorKind};
