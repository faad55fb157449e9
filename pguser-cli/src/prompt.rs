//! Interactive prompt helper

use std::io::{BufRead, Write};

/// Prompt error types
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The input stream ended before anything was read
    #[error("input stream closed")]
    Closed,

    /// The input stream ended partway through a line
    #[error("input ended before a line terminator")]
    Unterminated,

    /// Reading or writing failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes `question`, then reads one line and returns it trimmed
///
/// The question is written without a trailing newline and flushed, so the
/// answer is typed on the same line.
///
/// # Errors
///
/// - `InputError::Closed` if `input` is already at EOF
/// - `InputError::Unterminated` if EOF arrives before `\n`
/// - `InputError::Io` on any read or write failure
pub fn prompt<R, W>(input: &mut R, output: &mut W, question: &str) -> Result<String, InputError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    output.write_all(question.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::Closed);
    }
    if !line.ends_with('\n') {
        return Err(InputError::Unterminated);
    }

    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_trims_whitespace() {
        let mut input = Cursor::new("  Bob  \n");
        let mut output = Vec::new();

        let answer = prompt(&mut input, &mut output, "First name: ").unwrap();

        assert_eq!(answer, "Bob");
        assert_eq!(output, b"First name: ");
    }

    #[test]
    fn test_prompt_handles_crlf() {
        let mut input = Cursor::new("Alice\r\n");
        let mut output = Vec::new();

        assert_eq!(prompt(&mut input, &mut output, "").unwrap(), "Alice");
    }

    #[test]
    fn test_prompt_reads_one_line_at_a_time() {
        let mut input = Cursor::new("Alice\nSmith\n");
        let mut output = Vec::new();

        assert_eq!(prompt(&mut input, &mut output, "First name: ").unwrap(), "Alice");
        assert_eq!(prompt(&mut input, &mut output, "Last name: ").unwrap(), "Smith");
        assert_eq!(output, b"First name: Last name: ");
    }

    #[test]
    fn test_prompt_blank_line_is_empty_answer() {
        let mut input = Cursor::new("   \n");
        let mut output = Vec::new();

        assert_eq!(prompt(&mut input, &mut output, "").unwrap(), "");
    }

    #[test]
    fn test_prompt_closed_stream() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let err = prompt(&mut input, &mut output, "First name: ").unwrap_err();
        assert!(matches!(err, InputError::Closed));
    }

    #[test]
    fn test_prompt_unterminated_line() {
        let mut input = Cursor::new("Bob");
        let mut output = Vec::new();

        let err = prompt(&mut input, &mut output, "").unwrap_err();
        assert!(matches!(err, InputError::Unterminated));
    }
}
