//! CLI entrypoint for posting a pull request comment through the proxy.

use std::io::{self, Write};
use std::process::ExitCode;

use ghcp_client::render::write_response;
use ghcp_client::{
    BearerAuthInterceptor, CommentPoster, CommentTarget, CommentsProxyClient, CommentsProxyError,
    CreatePullRequestCommentRequest, DEFAULT_API_BASE_URL, GhcpClientConfig, RepositoryName,
    RepositoryOwner,
};
use tracing_subscriber::EnvFilter;

/// Repository owner the example comment targets.
const COMMENT_OWNER: &str = "safedep";

/// Repository name the example comment targets.
const COMMENT_REPO: &str = "ghcp";

/// Body of the example comment.
const COMMENT_BODY: &str = "Hello, world!";

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

/// Installs a stderr subscriber filtered by `RUST_LOG`.
///
/// Diagnostics go to stderr so stdout stays reserved for the RPC response.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

async fn run() -> Result<(), CommentsProxyError> {
    let config = GhcpClientConfig::from_env();

    let token = config.resolve_token()?;
    let pull_request_number = config.resolve_pull_request_number()?;

    let target = CommentTarget::from_parts(
        RepositoryOwner::new(COMMENT_OWNER)?,
        RepositoryName::new(COMMENT_REPO)?,
        pull_request_number,
    );
    let request = CreatePullRequestCommentRequest::new(&target, COMMENT_BODY);

    let client = CommentsProxyClient::builder(DEFAULT_API_BASE_URL)
        .interceptor(BearerAuthInterceptor::new(token))
        .build()?;
    let poster = CommentPoster::new(&client);
    let response = poster.post(&request).await?;

    write_response(&response)?;
    Ok(())
}
