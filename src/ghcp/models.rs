//! Payload types exchanged with the comments proxy.

use serde::Serialize;
use serde_json::Value;

use super::target::CommentTarget;

/// Payload for the `CreatePullRequestComment` procedure.
///
/// Field names follow the proxy's proto3 JSON mapping (`prNumber`). The
/// optional tag marks a comment for in-place updates: when a tag is present
/// the proxy rewrites the existing comment containing it instead of creating
/// a new one, and the field is omitted from the payload when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePullRequestCommentRequest {
    owner: String,
    repo: String,
    pr_number: String,
    body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<String>,
}

impl CreatePullRequestCommentRequest {
    /// Builds a request posting `body` to the given target.
    #[must_use]
    pub fn new(target: &CommentTarget, body: impl Into<String>) -> Self {
        Self {
            owner: target.owner().as_str().to_owned(),
            repo: target.repository().as_str().to_owned(),
            pr_number: target.number().as_str().to_owned(),
            body: body.into(),
            tag: None,
        }
    }

    /// Marks the comment with a tag so the proxy updates it in place.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Repository owner the comment targets.
    #[must_use]
    pub const fn owner(&self) -> &str {
        self.owner.as_str()
    }

    /// Repository name the comment targets.
    #[must_use]
    pub const fn repo(&self) -> &str {
        self.repo.as_str()
    }

    /// Pull request number, as configured.
    #[must_use]
    pub const fn pr_number(&self) -> &str {
        self.pr_number.as_str()
    }

    /// Comment body text.
    #[must_use]
    pub const fn body(&self) -> &str {
        self.body.as_str()
    }

    /// Update tag, when set.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }
}

/// Opaque response returned by the proxy.
///
/// The response schema belongs to the remote service. Callers never inspect
/// individual fields; the payload is carried as raw JSON and rendered as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentResponse(Value);

impl CommentResponse {
    /// Borrow the raw JSON payload.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for CommentResponse {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
