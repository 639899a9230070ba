//! Integration tests for posting from a markdown file.

use serde_json::json;
use tumblepost_cli::{run_with_publisher, PostInput};
use tumblepost_client::MockPublisher;

use crate::common::{post_file, sample_post, TestHarness, TEST_BLOG};

#[tokio::test]
async fn test_file_post_is_published_verbatim() {
    let harness = TestHarness::new();
    let file = sample_post();
    let input = PostInput::File(file.path().to_path_buf());

    let receipt = run_with_publisher(harness.publisher.as_ref(), &harness.config, &input)
        .await
        .expect("post should be published");

    assert_eq!(receipt.id, "1");
    assert_eq!(harness.publisher.auth_calls(), 1);

    let posts = harness.publisher.posts();
    assert_eq!(posts.len(), 1);
    let (blog, payload) = &posts[0];
    assert_eq!(blog, TEST_BLOG);
    assert_eq!(payload.post_type, "text");
    assert_eq!(payload.format, "markdown");
    assert_eq!(payload.title.as_deref(), Some("Weekend Project"));
    assert_eq!(
        payload.tags.as_deref(),
        Some(&["rust".to_string(), "cli".to_string(), "tumblr".to_string()][..])
    );
    assert!(payload.body.starts_with("Built a small poster."));
    assert!(payload.body.contains("![screenshot](https://img.example/shot.png)"));
    assert!(payload.body.ends_with("[on GitHub](https://github.com/example/poster)."));
}

#[tokio::test]
async fn test_missing_file_is_malformed_input() {
    let harness = TestHarness::new();
    let input = PostInput::File("/nonexistent/tumblepost/post.md".into());

    let err = run_with_publisher(harness.publisher.as_ref(), &harness.config, &input)
        .await
        .unwrap_err();

    assert_eq!(err.category(), "input");
    assert!(err.to_string().contains("File not found"));
    assert!(harness.publisher.posts().is_empty());
}

#[tokio::test]
async fn test_two_line_file_is_rejected_before_dispatch() {
    let harness = TestHarness::new();
    let file = post_file("Title\n#tag\n");
    let input = PostInput::File(file.path().to_path_buf());

    let err = run_with_publisher(harness.publisher.as_ref(), &harness.config, &input)
        .await
        .unwrap_err();

    assert_eq!(err.category(), "input");
    assert!(harness.publisher.posts().is_empty());
}

#[tokio::test]
async fn test_rejected_post_reports_details() {
    let harness = TestHarness::with_publisher(MockPublisher::new().with_response(json!({
        "errors": [
            {"title": "Bad Request", "code": 8001, "detail": "Posting failed"},
            {"code": 8002}
        ]
    })));
    let file = sample_post();
    let input = PostInput::File(file.path().to_path_buf());

    let err = run_with_publisher(harness.publisher.as_ref(), &harness.config, &input)
        .await
        .unwrap_err();

    assert_eq!(err.category(), "dispatch");
    let msg = err.to_string();
    assert!(msg.contains("Failed to create post:"));
    assert!(msg.contains("Posting failed"));
    assert!(msg.contains("8002"));
}

#[tokio::test]
async fn test_failed_authentication_stops_the_run() {
    let harness = TestHarness::with_publisher(MockPublisher::new().rejecting_auth());
    let file = sample_post();
    let input = PostInput::File(file.path().to_path_buf());

    let err = run_with_publisher(harness.publisher.as_ref(), &harness.config, &input)
        .await
        .unwrap_err();

    assert_eq!(err.category(), "dispatch");
    assert!(harness.publisher.posts().is_empty());
}
