//! One-shot generate command handler.

use sparkgen::display::{MISSING_CREDENTIAL_HINT, render_result, render_state};
use sparkgen::{CodeGenerator, CompletionDriver, SparkgenResult};
use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;

/// Generates code for `instructions`, or for stdin when none are given.
///
/// Exits non-zero when generation fails, after printing the error banner.
#[tracing::instrument(skip_all)]
pub async fn handle_generate_command<D: CompletionDriver>(
    generator: &CodeGenerator<D>,
    instructions: Option<String>,
) -> SparkgenResult<ExitCode> {
    let instructions = match instructions {
        Some(text) if text != "-" => text,
        _ => read_stdin()?,
    };

    if !generator.has_credential() {
        eprintln!("{MISSING_CREDENTIAL_HINT}");
    }

    let result = generator
        .generate_observed(&instructions, |state| {
            if let Err(e) = render_state(state, &mut io::stderr()) {
                tracing::debug!(error = %e, "Failed to write busy indicator");
            }
        })
        .await;

    render_result(&result, &mut io::stdout().lock(), &mut io::stderr())?;

    Ok(if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn read_stdin() -> io::Result<String> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("Enter instructions, then press Ctrl-D:");
    }
    let mut buffer = String::new();
    stdin.read_to_string(&mut buffer)?;
    Ok(buffer)
}
