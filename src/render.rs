//! Output rendering for proxy responses.

use std::io::{self, Write};

use crate::ghcp::error::CommentsProxyError;
use crate::ghcp::models::CommentResponse;

/// Writes the proxy response to stdout as indented JSON.
///
/// # Errors
///
/// Returns [`CommentsProxyError::Io`] if writing to stdout fails.
pub fn write_response(response: &CommentResponse) -> Result<(), CommentsProxyError> {
    let mut stdout = io::stdout().lock();
    write_response_to(&mut stdout, response)
}

/// Writes the proxy response to the given writer as indented JSON.
///
/// The payload is rendered with two-space indentation and a trailing
/// newline. Its contents are not inspected; whatever the proxy returned is
/// shown verbatim.
///
/// # Errors
///
/// Returns [`CommentsProxyError::Io`] if serialisation or writing fails.
pub fn write_response_to<W: Write>(
    writer: &mut W,
    response: &CommentResponse,
) -> Result<(), CommentsProxyError> {
    serde_json::to_writer_pretty(&mut *writer, response.as_value()).map_err(|e| {
        CommentsProxyError::Io {
            message: format!("JSON serialisation failed: {e}"),
        }
    })?;
    writeln!(writer).map_err(|e| io_error(&e))
}

/// Converts an I/O error to a [`CommentsProxyError::Io`].
fn io_error(error: &io::Error) -> CommentsProxyError {
    CommentsProxyError::Io {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::ghcp::models::CommentResponse;

    use super::write_response_to;

    #[test]
    fn write_response_to_pretty_prints_payload() {
        let response = CommentResponse::from(json!({ "id": 123 }));

        let mut buffer = Vec::new();
        write_response_to(&mut buffer, &response).expect("should write response");

        let output = String::from_utf8(buffer).expect("output should be valid UTF-8");
        assert_eq!(
            output, "{\n  \"id\": 123\n}\n",
            "unexpected rendering: {output}"
        );
    }

    #[test]
    fn write_response_to_renders_nested_payloads() {
        let response = CommentResponse::from(json!({
            "commentId": "c-9",
            "labels": ["one", "two"]
        }));

        let mut buffer = Vec::new();
        write_response_to(&mut buffer, &response).expect("should write response");

        let output = String::from_utf8(buffer).expect("output should be valid UTF-8");
        assert!(
            output.contains("\"commentId\": \"c-9\""),
            "missing comment id: {output}"
        );
        assert!(
            output.ends_with('\n'),
            "missing trailing newline: {output}"
        );
    }
}
