//! High-level posting facade used by the CLI.

use super::client::CommentsProxy;
use super::error::CommentsProxyError;
use super::models::{CommentResponse, CreatePullRequestCommentRequest};

/// Posts pull request comments through a comments proxy client.
pub struct CommentPoster<'client, Proxy>
where
    Proxy: CommentsProxy,
{
    client: &'client Proxy,
}

impl<'client, Proxy> CommentPoster<'client, Proxy>
where
    Proxy: CommentsProxy,
{
    /// Create a new poster using the provided proxy client.
    #[must_use]
    pub const fn new(client: &'client Proxy) -> Self {
        Self { client }
    }

    /// Post one comment and return the proxy's opaque response.
    ///
    /// Exactly one attempt is made; failures are not retried.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying client, including
    /// authentication rejections and network problems.
    pub async fn post(
        &self,
        request: &CreatePullRequestCommentRequest,
    ) -> Result<CommentResponse, CommentsProxyError> {
        self.client.create_pull_request_comment(request).await
    }
}
