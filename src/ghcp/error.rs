//! Error types exposed by the comments proxy client.

use thiserror::Error;

/// Errors surfaced while resolving inputs or calling the comments proxy.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentsProxyError {
    /// The authentication token was missing.
    #[error("GitHub token is required (set GITHUB_TOKEN)")]
    MissingToken,

    /// The pull request number was missing.
    #[error("pull request number is required (set GITHUB_PULL_REQUEST_NUMBER)")]
    MissingPullRequestNumber,

    /// The repository owner was blank.
    #[error("repository owner is required")]
    MissingOwner,

    /// The repository name was blank.
    #[error("repository name is required")]
    MissingRepository,

    /// The API base URL could not be parsed.
    #[error("API base URL is invalid: {0}")]
    InvalidEndpoint(String),

    /// Client construction or other local setup failed.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The proxy rejected the supplied credentials.
    #[error("comments proxy rejected the token: {message}")]
    Authentication {
        /// Proxy error message returned with the 401/403 response.
        message: String,
    },

    /// The proxy returned a non-authentication error.
    #[error("comments proxy error: {message}")]
    Api {
        /// Response detail describing the failure.
        message: String,
    },

    /// Networking failed while calling the proxy.
    #[error("network error talking to the comments proxy: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl CommentsProxyError {
    /// Reports whether the error was raised before any network activity.
    ///
    /// Configuration errors cover missing or blank inputs and local client
    /// setup failures; everything else reflects the single remote attempt.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingToken
                | Self::MissingPullRequestNumber
                | Self::MissingOwner
                | Self::MissingRepository
                | Self::InvalidEndpoint(_)
                | Self::Configuration { .. }
        )
    }
}
