//! Connect JSON unary client for the comments proxy.
//!
//! The proxy is a Connect-RPC service, so a unary call is one HTTP POST to
//! `{base}/{package.Service}/{Method}` with JSON bodies and a protocol
//! version header. Dispatch stays here; header decoration belongs to the
//! interceptors registered at construction time.

mod error_mapping;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use super::error::CommentsProxyError;
use super::interceptor::RequestInterceptor;
use super::models::{CommentResponse, CreatePullRequestCommentRequest};

use error_mapping::{extract_connect_message, map_connect_error, map_transport_error};

/// Production base URL of the comments proxy.
pub const DEFAULT_API_BASE_URL: &str = "https://ghcp-integrations.safedep.io";

/// Procedure path for posting a comment, relative to the base URL.
const CREATE_COMMENT_PROCEDURE: &str =
    "safedep.services.ghcp.v1.GitHubCommentsProxyService/CreatePullRequestComment";

const CONNECT_PROTOCOL_VERSION_HEADER: &str = "connect-protocol-version";
const CONNECT_PROTOCOL_VERSION: &str = "1";

/// Client that can post pull request comments through the proxy.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentsProxy: Send + Sync {
    /// Posts one pull request comment and returns the proxy's response.
    async fn create_pull_request_comment(
        &self,
        request: &CreatePullRequestCommentRequest,
    ) -> Result<CommentResponse, CommentsProxyError>;
}

/// HTTP implementation of [`CommentsProxy`].
pub struct CommentsProxyClient {
    http: Client,
    base_url: Url,
    interceptors: Vec<Box<dyn RequestInterceptor>>,
}

impl CommentsProxyClient {
    /// Starts building a client for the given base URL.
    #[must_use]
    pub fn builder(base_url: impl Into<String>) -> CommentsProxyClientBuilder {
        CommentsProxyClientBuilder {
            base_url: base_url.into(),
            interceptors: Vec::new(),
        }
    }

    fn procedure_url(&self, procedure: &str) -> String {
        format!(
            "{}/{procedure}",
            self.base_url.as_str().trim_end_matches('/')
        )
    }

    async fn send_create_comment(
        &self,
        request: &CreatePullRequestCommentRequest,
    ) -> Result<CommentResponse, CommentsProxyError> {
        let endpoint = self.procedure_url(CREATE_COMMENT_PROCEDURE);
        let mut request_builder = self
            .http
            .post(endpoint)
            .header(CONNECT_PROTOCOL_VERSION_HEADER, CONNECT_PROTOCOL_VERSION)
            .json(request);
        for interceptor in &self.interceptors {
            request_builder = interceptor.intercept(request_builder);
        }

        tracing::debug!(
            "posting comment to {}/{} pull request {}",
            request.owner(),
            request.repo(),
            request.pr_number()
        );

        let response = request_builder
            .send()
            .await
            .map_err(|error| map_transport_error("create pull request comment", &error))?;

        let status = response.status();
        if status != StatusCode::OK {
            let maybe_message = response
                .text()
                .await
                .ok()
                .and_then(|content| extract_connect_message(&content));
            return Err(map_connect_error(
                "create pull request comment",
                status,
                maybe_message,
            ));
        }

        let payload =
            response
                .json::<serde_json::Value>()
                .await
                .map_err(|error| CommentsProxyError::Api {
                    message: format!("create pull request comment returned malformed JSON: {error}"),
                })?;

        Ok(CommentResponse::from(payload))
    }
}

#[async_trait]
impl CommentsProxy for CommentsProxyClient {
    async fn create_pull_request_comment(
        &self,
        request: &CreatePullRequestCommentRequest,
    ) -> Result<CommentResponse, CommentsProxyError> {
        self.send_create_comment(request).await
    }
}

/// Builder for [`CommentsProxyClient`].
pub struct CommentsProxyClientBuilder {
    base_url: String,
    interceptors: Vec<Box<dyn RequestInterceptor>>,
}

impl CommentsProxyClientBuilder {
    /// Registers an interceptor stage; stages run in registration order.
    #[must_use]
    pub fn interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.interceptors.push(Box::new(interceptor));
        self
    }

    /// Builds the client.
    ///
    /// No timeout is configured; the transport's defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`CommentsProxyError::InvalidEndpoint`] when the base URL
    /// cannot be parsed and [`CommentsProxyError::Configuration`] when the
    /// HTTP client cannot be constructed.
    pub fn build(self) -> Result<CommentsProxyClient, CommentsProxyError> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|error| CommentsProxyError::InvalidEndpoint(error.to_string()))?;
        let http = Client::builder()
            .build()
            .map_err(|error| CommentsProxyError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;

        Ok(CommentsProxyClient {
            http,
            base_url,
            interceptors: self.interceptors,
        })
    }
}
