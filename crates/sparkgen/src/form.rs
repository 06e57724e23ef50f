//! Line-based instruction entry for the interactive form.

use std::io::{self, Write};
use tokio::io::{AsyncBufRead, Lines};

/// Typed alone on the first line of a request, ends the session.
pub const QUIT_COMMAND: &str = ":quit";

/// Reads one request: lines up to the first empty line.
///
/// Returns `Ok(None)` on [`QUIT_COMMAND`] or when input ends with nothing
/// pending. An empty first line submits empty instructions so the handler can
/// report them as missing. Prompts are written to `prompt`.
pub async fn read_instructions<R>(
    lines: &mut Lines<R>,
    prompt: &mut impl Write,
) -> io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    write!(prompt, "> ")?;
    prompt.flush()?;

    let mut collected: Vec<String> = Vec::new();
    loop {
        match lines.next_line().await? {
            None if collected.is_empty() => return Ok(None),
            None => return Ok(Some(collected.join("\n"))),
            Some(line) if collected.is_empty() && line.trim() == QUIT_COMMAND => return Ok(None),
            Some(line) if line.trim().is_empty() => return Ok(Some(collected.join("\n"))),
            Some(line) => {
                collected.push(line);
                write!(prompt, ". ")?;
                prompt.flush()?;
            }
        }
    }
}
