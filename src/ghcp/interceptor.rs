//! Request interceptors applied before dispatch.
//!
//! Interceptors decorate the outbound request builder in the order they were
//! registered with the client. The only stage this program installs is
//! bearer authentication, but the seam keeps header concerns out of the
//! client's dispatch path.

use reqwest::RequestBuilder;

use super::target::BearerToken;

/// A single stage in the outbound request pipeline.
pub trait RequestInterceptor: Send + Sync {
    /// Decorates the outbound request and returns the updated builder.
    fn intercept(&self, request: RequestBuilder) -> RequestBuilder;
}

/// Interceptor that attaches `authorization: Bearer <token>` to every
/// request.
#[derive(Debug, Clone)]
pub struct BearerAuthInterceptor {
    token: BearerToken,
}

impl BearerAuthInterceptor {
    /// Creates an interceptor for the given token.
    #[must_use]
    pub const fn new(token: BearerToken) -> Self {
        Self { token }
    }
}

impl RequestInterceptor for BearerAuthInterceptor {
    fn intercept(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(self.token.value())
    }
}
