use std::io::prelude::*;
use std::num::NonZeroU64;

use tracing::debug;

use crate::error::PromptError;

/// Writes `prompt` to `output`, reads one line from `input` and parses it as
/// a whole number of at least 1.
///
/// The prompt is written before anything is read, even when the read fails.
/// Only one line is consumed, so the same `input` can be handed to the next
/// call.
pub fn ask_int<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<NonZeroU64, PromptError>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{} ", prompt).map_err(PromptError::Output)?;
    output.flush().map_err(PromptError::Output)?;

    let mut buf = Vec::new();
    match input.read_until(b'\n', &mut buf) {
        Ok(0) => {
            debug!(prompt, "input closed");
            return Err(PromptError::InputUnavailable { source: None });
        }
        Ok(_) => {}
        Err(e) => {
            debug!(prompt, error = %e, "read failed");
            return Err(PromptError::unavailable(e));
        }
    }
    // Bytes that are not UTF-8 can never be a number; keep them for the message.
    let line = String::from_utf8_lossy(&buf);
    debug!(prompt, line = line.trim_end(), "read line");

    parse_positive(&line)
}

fn parse_positive(line: &str) -> Result<NonZeroU64, PromptError> {
    let text = line.trim();
    if text.is_empty() {
        return Err(PromptError::EmptyInput);
    }
    let value: i64 = text.parse().map_err(|_| PromptError::InvalidFormat {
        input: text.to_owned(),
    })?;
    u64::try_from(value)
        .ok()
        .and_then(NonZeroU64::new)
        .ok_or_else(|| PromptError::OutOfRange {
            input: text.to_owned(),
        })
}
