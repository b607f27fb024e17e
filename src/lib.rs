//! Client library for the GitHub Comments Proxy.
//!
//! The library resolves credentials from the environment, validates the
//! comment target, and posts a pull request comment through the proxy's
//! Connect JSON unary endpoint. Request and response payloads belong to the
//! remote service; responses are carried opaquely and only rendered for
//! display.

pub mod config;
pub mod ghcp;
pub mod render;

pub use config::GhcpClientConfig;
pub use ghcp::{
    BearerAuthInterceptor, BearerToken, CommentPoster, CommentResponse, CommentTarget,
    CommentsProxy, CommentsProxyClient, CommentsProxyError, CreatePullRequestCommentRequest,
    DEFAULT_API_BASE_URL, PullRequestNumber, RepositoryName, RepositoryOwner, RequestInterceptor,
};
