//! Core data types for sparkgen.
//!
//! This crate holds everything the code-generation handler needs that does not
//! touch the network: the request and result types, the provider-neutral
//! completion request, the PySpark prompt catalog, and the fence-stripping
//! step applied to model output.

mod completion;
mod credential;
mod fence;
mod observability;
mod prompt;
mod request;
mod result;
mod role;

pub use completion::{
    CompletionRequest, CompletionRequestBuilder, CompletionResponse, Message, MessageBuilder,
};
pub use credential::Credential;
pub use fence::{extract_code, strip_code_fences};
pub use observability::{LogFormat, init_logging};
pub use prompt::{
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL, GenerationSettings, GenerationSettingsBuilder,
    SYSTEM_PROMPT, SYSTEM_PROMPT_VERSION, build_completion_request, user_message,
};
pub use request::{GenerationRequest, GenerationRequestBuilder};
pub use result::{GenerationResult, GenerationState};
pub use role::Role;
