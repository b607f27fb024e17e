//! Pull request comment posting through the GitHub Comments Proxy.
//!
//! The proxy fronts GitHub behind a Connect-RPC service. This module
//! validates the comment target, decorates outbound requests with bearer
//! credentials, performs the single unary call, and maps failures into
//! variants the binary can surface directly. Payload shapes are owned by the
//! remote service and carried opaquely.

pub mod client;
pub mod error;
pub mod interceptor;
pub mod models;
pub mod poster;
pub mod target;

pub use client::{
    CommentsProxy, CommentsProxyClient, CommentsProxyClientBuilder, DEFAULT_API_BASE_URL,
};
pub use error::CommentsProxyError;
pub use interceptor::{BearerAuthInterceptor, RequestInterceptor};
pub use models::{CommentResponse, CreatePullRequestCommentRequest};
pub use poster::CommentPoster;
pub use target::{BearerToken, CommentTarget, PullRequestNumber, RepositoryName, RepositoryOwner};

#[cfg(test)]
pub use client::MockCommentsProxy;

#[cfg(test)]
mod tests;
