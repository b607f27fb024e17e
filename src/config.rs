//! Process configuration read from the environment.
//!
//! The program accepts exactly two inputs, both environment variables:
//! `GITHUB_TOKEN` (the bearer credential) and `GITHUB_PULL_REQUEST_NUMBER`
//! (the pull request to comment on). There are no CLI flags and no
//! configuration files, so no layering applies. Both values are required;
//! resolution fails before any network activity when either is absent.

use std::env;

use crate::ghcp::error::CommentsProxyError;
use crate::ghcp::target::{BearerToken, PullRequestNumber};

/// Environment variable carrying the bearer token.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable carrying the pull request number.
pub const PULL_REQUEST_NUMBER_ENV: &str = "GITHUB_PULL_REQUEST_NUMBER";

/// Inputs captured from the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GhcpClientConfig {
    /// Bearer token for proxy authentication, when present.
    pub github_token: Option<String>,
    /// Pull request number to comment on, when present.
    pub pull_request_number: Option<String>,
}

impl GhcpClientConfig {
    /// Captures the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            github_token: env::var(GITHUB_TOKEN_ENV).ok(),
            pull_request_number: env::var(PULL_REQUEST_NUMBER_ENV).ok(),
        }
    }

    /// Resolves the bearer token into a validated credential.
    ///
    /// # Errors
    ///
    /// Returns [`CommentsProxyError::MissingToken`] when `GITHUB_TOKEN` is
    /// unset or blank.
    pub fn resolve_token(&self) -> Result<BearerToken, CommentsProxyError> {
        self.github_token
            .as_deref()
            .ok_or(CommentsProxyError::MissingToken)
            .and_then(BearerToken::new)
    }

    /// Resolves the pull request number into a validated value.
    ///
    /// # Errors
    ///
    /// Returns [`CommentsProxyError::MissingPullRequestNumber`] when
    /// `GITHUB_PULL_REQUEST_NUMBER` is unset or blank.
    pub fn resolve_pull_request_number(&self) -> Result<PullRequestNumber, CommentsProxyError> {
        self.pull_request_number
            .as_deref()
            .ok_or(CommentsProxyError::MissingPullRequestNumber)
            .and_then(PullRequestNumber::new)
    }
}
