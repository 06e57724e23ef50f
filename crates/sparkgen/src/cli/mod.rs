//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the sparkgen binary.

mod commands;
mod generate;
mod interactive;
mod prompt;

pub use commands::{Cli, Commands};
pub use generate::handle_generate_command;
pub use interactive::handle_interactive_command;
pub use prompt::handle_prompt_command;
