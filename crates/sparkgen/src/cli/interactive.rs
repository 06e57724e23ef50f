//! Interactive form loop.

use sparkgen::display::{MISSING_CREDENTIAL_HINT, render_result, render_state};
use sparkgen::form::{QUIT_COMMAND, read_instructions};
use sparkgen::{CodeGenerator, CompletionDriver, SparkgenResult};
use std::io::{self, Write};
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Runs the form until `:quit` or end of input.
///
/// Generation failures are shown inline and never end the loop.
#[tracing::instrument(skip_all)]
pub async fn handle_interactive_command<D: CompletionDriver>(
    generator: &CodeGenerator<D>,
) -> SparkgenResult<ExitCode> {
    let mut out = io::stdout();
    let mut err = io::stderr();

    writeln!(err, "PySpark Code Generator")?;
    writeln!(
        err,
        "Enter your data manipulation instructions and get clean PySpark code."
    )?;
    writeln!(
        err,
        "Finish each request with an empty line. Type {QUIT_COMMAND} or press Ctrl-D to exit."
    )?;
    if !generator.has_credential() {
        writeln!(err, "{MISSING_CREDENTIAL_HINT}")?;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut submissions = 0usize;

    while let Some(instructions) = read_instructions(&mut lines, &mut err).await? {
        submissions += 1;
        let result = generator
            .generate_observed(&instructions, |state| {
                if let Err(e) = render_state(state, &mut io::stderr()) {
                    tracing::debug!(error = %e, "Failed to write busy indicator");
                }
            })
            .await;
        render_result(&result, &mut out, &mut err)?;
        writeln!(err)?;
    }

    tracing::info!(submissions, "Interactive session ended");
    Ok(ExitCode::SUCCESS)
}
