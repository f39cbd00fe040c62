//! Internal utilities for capturing command output.
//!
//! Each pipe is drained on its own thread so a chatty stream cannot fill
//! its OS buffer and stall the child while the other stream is read.

use std::io::{BufRead, BufReader, Read};

/// Type of output stream for logging purposes.
#[derive(Clone, Copy)]
pub(super) enum StreamType {
    Stdout,
    Stderr,
}

impl std::fmt::Display for StreamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdout => f.write_str("stdout"),
            Self::Stderr => f.write_str("stderr"),
        }
    }
}

/// Extracts a human-readable message from a thread panic.
pub(super) fn panic_message(err: &(dyn std::any::Any + Send)) -> &str {
    err.downcast_ref::<&str>()
        .copied()
        .or_else(|| err.downcast_ref::<String>().map(|s| s.as_str()))
        .unwrap_or("unknown panic")
}

/// Reads a pipe to EOF, returning every byte read.
///
/// - Bytes are captured verbatim, including non-UTF-8 data and line endings.
/// - Each line is also traced at DEBUG level (lossy UTF-8, trailing CR/LF trimmed).
/// - An I/O error stops reading; whatever was captured so far is returned.
/// - `None` pipe logs an error and returns an empty buffer.
pub(super) fn read_pipe_to_buffer<R: Read>(pipe: Option<R>, stream_type: StreamType) -> Vec<u8> {
    let mut captured = Vec::new();
    let Some(pipe) = pipe else {
        tracing::error!(
            stream = %stream_type,
            "pipe was None (unexpected: Stdio::piped() was set), no output will be captured"
        );
        return captured;
    };

    let mut reader = BufReader::new(pipe);
    let mut line_buf = Vec::new();

    loop {
        line_buf.clear();
        match reader.read_until(b'\n', &mut line_buf) {
            Ok(0) => break,
            Ok(_) => {
                captured.extend_from_slice(&line_buf);
                let content = line_buf.strip_suffix(b"\n").unwrap_or(&line_buf);
                let text = String::from_utf8_lossy(content);
                tracing::debug!(stream = %stream_type, "{}", text.trim_end_matches('\r'));
            }
            Err(e) => {
                tracing::error!(stream = %stream_type, error = %e, "I/O error, stopping read");
                break;
            }
        }
    }

    captured
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_pipe_preserves_bytes() {
        let input: &[u8] = b"line one\r\nline two\n\xffno newline";
        let captured = read_pipe_to_buffer(Some(input), StreamType::Stdout);
        assert_eq!(captured, input);
    }

    #[test]
    fn test_read_pipe_none_is_empty() {
        let captured = read_pipe_to_buffer::<&[u8]>(None, StreamType::Stderr);
        assert!(captured.is_empty());
    }

    #[test]
    fn test_panic_message_variants() {
        let boxed: Box<dyn std::any::Any + Send> = Box::new("static str");
        assert_eq!(panic_message(&*boxed), "static str");
        let boxed: Box<dyn std::any::Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(&*boxed), "owned");
        let boxed: Box<dyn std::any::Any + Send> = Box::new(42_u32);
        assert_eq!(panic_message(&*boxed), "unknown panic");
    }
}
