//! Generate PySpark DataFrame code from natural-language instructions.
//!
//! The [`CodeGenerator`] handler validates a request, sends one completion
//! call through a [`CompletionDriver`], and returns the cleaned code or a
//! displayable failure. [`AppConfig`] loads settings for the `sparkgen`
//! binary, [`form`] reads interactive input, and [`display`] renders results
//! for the terminal.
//!
//! ```no_run
//! use sparkgen::{AnthropicClient, AnthropicConfig, CodeGenerator, Credential};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AnthropicClient::new(AnthropicConfig::default())?;
//! let generator = CodeGenerator::new(client, Credential::new("sk-ant-..."));
//! let result = generator.generate("Filter patients where age > 65").await;
//! println!("{result:?}");
//! # Ok(())
//! # }
//! ```

mod config;
pub mod display;
pub mod form;
mod generator;

pub use config::{AppConfig, CONFIG_FILE_NAME, CliOverrides};
pub use generator::CodeGenerator;

pub use sparkgen_core::{
    CompletionRequest, CompletionResponse, Credential, GenerationRequest, GenerationResult,
    GenerationSettings, GenerationState, LogFormat, SYSTEM_PROMPT, SYSTEM_PROMPT_VERSION,
    init_logging, strip_code_fences,
};
pub use sparkgen_error::{
    GenerationError, ModelsError, SparkgenError, SparkgenErrorKind, SparkgenResult,
    ValidationError, ValidationErrorKind,
};
pub use sparkgen_interface::CompletionDriver;
pub use sparkgen_models::{ANTHROPIC_API_KEY_VAR, AnthropicClient, AnthropicConfig};
