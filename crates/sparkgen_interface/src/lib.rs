//! Trait definitions for sparkgen.
//!
//! The code-generation handler reaches an LLM only through
//! [`CompletionDriver`], which keeps the handler testable with an in-process
//! driver and leaves room for providers other than Anthropic.

mod driver;

pub use driver::CompletionDriver;
