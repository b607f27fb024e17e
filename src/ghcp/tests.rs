//! Unit tests for the comments proxy module.

use mockall::predicate::function;
use rstest::rstest;
use serde_json::json;

use super::{
    BearerToken, CommentPoster, CommentResponse, CommentTarget, CommentsProxyError,
    CreatePullRequestCommentRequest, MockCommentsProxy, PullRequestNumber,
};

fn sample_target() -> CommentTarget {
    CommentTarget::new("safedep", "ghcp", "42").expect("sample target should validate")
}

#[rstest]
fn rejects_blank_owner() {
    let result = CommentTarget::new("   ", "ghcp", "42");
    assert!(
        matches!(result, Err(CommentsProxyError::MissingOwner)),
        "expected MissingOwner, got {result:?}"
    );
}

#[rstest]
fn rejects_blank_repository() {
    let result = CommentTarget::new("safedep", "", "42");
    assert!(
        matches!(result, Err(CommentsProxyError::MissingRepository)),
        "expected MissingRepository, got {result:?}"
    );
}

#[rstest]
fn rejects_blank_pull_request_number() {
    let result = CommentTarget::new("safedep", "ghcp", "  ");
    assert!(
        matches!(result, Err(CommentsProxyError::MissingPullRequestNumber)),
        "expected MissingPullRequestNumber, got {result:?}"
    );
}

#[rstest]
fn trims_target_parts() {
    let target =
        CommentTarget::new(" safedep ", " ghcp ", " 42 ").expect("padded target should validate");
    assert_eq!(target.owner().as_str(), "safedep", "owner mismatch");
    assert_eq!(target.repository().as_str(), "ghcp", "repository mismatch");
    assert_eq!(target.number().as_str(), "42", "number mismatch");
}

#[rstest]
fn preserves_pull_request_number_text() {
    let number = PullRequestNumber::new("007").expect("number should validate");
    assert_eq!(
        number.as_str(),
        "007",
        "number must be forwarded verbatim, not re-rendered"
    );
}

#[rstest]
fn rejects_empty_token() {
    let result = BearerToken::new(String::new());
    assert!(
        matches!(result, Err(CommentsProxyError::MissingToken)),
        "expected MissingToken, got {result:?}"
    );
}

#[rstest]
fn missing_input_errors_name_their_variables() {
    assert!(
        CommentsProxyError::MissingToken
            .to_string()
            .contains("GITHUB_TOKEN"),
        "token error should name the environment variable"
    );
    assert!(
        CommentsProxyError::MissingPullRequestNumber
            .to_string()
            .contains("GITHUB_PULL_REQUEST_NUMBER"),
        "pull request number error should name the environment variable"
    );
}

#[rstest]
#[case::missing_token(CommentsProxyError::MissingToken, true)]
#[case::missing_number(CommentsProxyError::MissingPullRequestNumber, true)]
#[case::invalid_endpoint(CommentsProxyError::InvalidEndpoint("bad".to_owned()), true)]
#[case::configuration(
    CommentsProxyError::Configuration { message: "client".to_owned() },
    true
)]
#[case::authentication(
    CommentsProxyError::Authentication { message: "rejected".to_owned() },
    false
)]
#[case::api(CommentsProxyError::Api { message: "failed".to_owned() }, false)]
#[case::network(CommentsProxyError::Network { message: "refused".to_owned() }, false)]
fn classifies_configuration_errors(#[case] error: CommentsProxyError, #[case] expected: bool) {
    assert_eq!(
        error.is_configuration(),
        expected,
        "classification mismatch for {error:?}"
    );
}

#[rstest]
fn request_serialises_proto_json_field_names() {
    let request = CreatePullRequestCommentRequest::new(&sample_target(), "Hello, world!");

    let value = serde_json::to_value(&request).expect("request should serialise");
    assert_eq!(
        value,
        json!({
            "owner": "safedep",
            "repo": "ghcp",
            "prNumber": "42",
            "body": "Hello, world!"
        }),
        "payload shape mismatch"
    );
}

#[rstest]
fn request_includes_tag_only_when_set() {
    let request =
        CreatePullRequestCommentRequest::new(&sample_target(), "Hello, world!").with_tag("report");

    assert_eq!(request.tag(), Some("report"), "tag accessor mismatch");

    let value = serde_json::to_value(&request).expect("request should serialise");
    assert_eq!(
        value.get("tag").and_then(serde_json::Value::as_str),
        Some("report"),
        "tag should serialise when set"
    );
}

#[tokio::test]
async fn poster_delegates_to_proxy() {
    let mut proxy = MockCommentsProxy::new();
    proxy
        .expect_create_pull_request_comment()
        .with(function(|request: &CreatePullRequestCommentRequest| {
            request.pr_number() == "42" && request.body() == "Hello, world!"
        }))
        .times(1)
        .returning(|_| Ok(CommentResponse::from(json!({ "commentId": "c1" }))));

    let request = CreatePullRequestCommentRequest::new(&sample_target(), "Hello, world!");
    let poster = CommentPoster::new(&proxy);
    let response = poster.post(&request).await.expect("post should succeed");

    assert_eq!(
        response.as_value(),
        &json!({ "commentId": "c1" }),
        "response mismatch"
    );
}

#[tokio::test]
async fn poster_propagates_proxy_errors() {
    let mut proxy = MockCommentsProxy::new();
    proxy
        .expect_create_pull_request_comment()
        .times(1)
        .returning(|_| {
            Err(CommentsProxyError::Network {
                message: "connection refused".to_owned(),
            })
        });

    let request = CreatePullRequestCommentRequest::new(&sample_target(), "Hello, world!");
    let poster = CommentPoster::new(&proxy);
    let error = poster
        .post(&request)
        .await
        .expect_err("proxy failure should propagate");

    assert!(
        matches!(error, CommentsProxyError::Network { .. }),
        "expected Network variant, got {error:?}"
    );
}
