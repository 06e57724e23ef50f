//! Terminal rendering of generation results.
//!
//! Generated code goes to `out` alone so it can be piped; headings, the busy
//! indicator, and error banners go to `err`.

use sparkgen_core::{GenerationResult, GenerationState};
use std::io::{self, Write};

/// Heading shown above successful output.
pub const CODE_HEADING: &str = "Generated Code";

/// Shown while a request is in flight.
pub const BUSY_MESSAGE: &str = "Generating code...";

/// Prefix of every failure banner.
pub const ERROR_PREFIX: &str = "Error generating code";

/// Shown when no credential was configured at startup.
pub const MISSING_CREDENTIAL_HINT: &str =
    "Please set ANTHROPIC_API_KEY or pass --api-key to enable code generation";

/// Writes a result: code to `out`, heading or error banner to `err`.
pub fn render_result(
    result: &GenerationResult,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    match result {
        GenerationResult::Success(code) => {
            writeln!(err, "{CODE_HEADING}")?;
            writeln!(err, "{}", "-".repeat(CODE_HEADING.len()))?;
            writeln!(out, "{code}")?;
            out.flush()
        }
        GenerationResult::Failure(message) => {
            writeln!(err, "{ERROR_PREFIX}: {message}")?;
            err.flush()
        }
    }
}

/// Writes the busy indicator when a request enters `InFlight`.
pub fn render_state(state: &GenerationState, err: &mut impl Write) -> io::Result<()> {
    if state.is_in_flight() {
        writeln!(err, "{BUSY_MESSAGE}")?;
        err.flush()?;
    }
    Ok(())
}
