//! Markdown code-fence removal for model output.

use crate::CompletionResponse;

const BACKTICK: char = '`';
const FENCE_LEN: usize = 3;

fn is_tag_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '#' | '.' | '_' | '-')
}

/// Length of the language tag at the head of `rest`, or 0 when the head is
/// code. A tag must be followed by nothing but spaces or tabs up to the end of
/// the line.
fn language_tag_len(rest: impl Iterator<Item = char>) -> usize {
    let mut rest = rest.peekable();
    let mut len = 0;
    while rest.next_if(|&c| is_tag_char(c)).is_some() {
        len += 1;
    }
    while rest.next_if(|&c| c == ' ' || c == '\t').is_some() {}

    match rest.peek() {
        None | Some('\n') => len,
        Some(_) => 0,
    }
}

/// Removes markdown code-fence markers from `text`.
///
/// Any run of three or more backticks is a fence marker and is dropped. A
/// marker that opens a line (only spaces or tabs before it) also loses the
/// language tag that follows it, so `` ```python `` disappears whole. A word
/// counts as a tag only when it ends the line; `` ```df.count()``` `` keeps
/// its code. Shorter backtick runs are inline code and stay. The result is
/// trimmed, and cleaning an already-cleaned string is a no-op.
///
/// # Examples
///
/// ```
/// use sparkgen_core::strip_code_fences;
///
/// let raw = "```python\ndf.filter(f.col(\"age\") > 65)\n```";
/// assert_eq!(strip_code_fences(raw), "df.filter(f.col(\"age\") > 65)");
/// assert_eq!(strip_code_fences("df.select(\"id\")"), "df.select(\"id\")");
/// ```
pub fn strip_code_fences(text: &str) -> String {
    let trimmed = text.trim();
    let mut out = String::with_capacity(trimmed.len());
    let mut chars = trimmed.chars().peekable();
    let mut at_line_start = true;

    while let Some(c) = chars.next() {
        if c != BACKTICK {
            out.push(c);
            at_line_start = match c {
                '\n' => true,
                ' ' | '\t' => at_line_start,
                _ => false,
            };
            continue;
        }

        let mut run = 1;
        while chars.next_if_eq(&BACKTICK).is_some() {
            run += 1;
        }

        if run < FENCE_LEN {
            out.extend(std::iter::repeat_n(BACKTICK, run));
            at_line_start = false;
            continue;
        }

        if at_line_start {
            let tag_len = language_tag_len(chars.clone());
            chars.by_ref().take(tag_len).for_each(drop);
        }
    }

    out.trim().to_string()
}

/// Takes the first text segment of a response and strips its fences.
///
/// Returns `None` when the response has no segments.
pub fn extract_code(response: &CompletionResponse) -> Option<String> {
    response.first_segment().map(strip_code_fences)
}
