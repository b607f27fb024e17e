//! Error mapping helpers for the comments proxy client.

use http::StatusCode;

use crate::ghcp::error::CommentsProxyError;

/// Checks if a proxy error status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

pub(super) fn map_connect_error(
    operation: &str,
    status: StatusCode,
    maybe_message: Option<String>,
) -> CommentsProxyError {
    let message = maybe_message.unwrap_or_else(|| "unknown error".to_owned());
    if is_auth_failure(status) {
        CommentsProxyError::Authentication {
            message: format!("{operation} failed: proxy returned {status} {message}"),
        }
    } else {
        CommentsProxyError::Api {
            message: format!("{operation} failed with status {status}: {message}"),
        }
    }
}

pub(super) fn map_transport_error(operation: &str, error: &reqwest::Error) -> CommentsProxyError {
    if error.is_builder() || error.is_decode() {
        CommentsProxyError::Api {
            message: format!("{operation} failed: {error}"),
        }
    } else {
        CommentsProxyError::Network {
            message: format!("{operation} failed: {error}"),
        }
    }
}

/// Extracts the `message` field from a Connect error body.
pub(super) fn extract_connect_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}
