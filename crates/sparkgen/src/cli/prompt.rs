//! Prompt command handler.

use sparkgen::{SYSTEM_PROMPT, SYSTEM_PROMPT_VERSION};
use std::io::{self, Write};

/// Prints the system prompt and its version.
pub fn handle_prompt_command(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "# {SYSTEM_PROMPT_VERSION}")?;
    writeln!(out)?;
    writeln!(out, "{SYSTEM_PROMPT}")?;
    out.flush()
}
