//! Integration tests for posting from discrete field flags.

use clap::Parser;
use serde_json::json;
use tumblepost_cli::{resolve_input, run_with_publisher, Args};
use tumblepost_client::MockPublisher;

use crate::common::TestHarness;

fn args(argv: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("tumblepost").chain(argv.iter().copied()))
        .expect("arguments should parse")
}

#[tokio::test]
async fn test_all_fields_compose_in_order() {
    let harness = TestHarness::new();
    let args = args(&[
        "--title",
        "Release Notes",
        "--description",
        "Version 2 is out.",
        "--image-url",
        "https://img.example/v2.png",
        "--alt-text",
        "Banner",
        "--link",
        "https://example.com/v2",
        "--hashtags",
        "#release, news",
    ]);
    let input = resolve_input(&args).unwrap();

    run_with_publisher(harness.publisher.as_ref(), &harness.config, &input)
        .await
        .unwrap();

    let posts = harness.publisher.posts();
    let payload = &posts[0].1;
    assert_eq!(
        payload.body,
        "Version 2 is out.\n\n\
         <img src=\"https://img.example/v2.png\" alt=\"Banner\">\n\n\
         [Release Notes](https://example.com/v2)"
    );
    assert_eq!(payload.title.as_deref(), Some("Release Notes"));
    assert_eq!(
        payload.tags.as_deref(),
        Some(&["release".to_string(), "news".to_string()][..])
    );
}

#[tokio::test]
async fn test_link_only_post() {
    let harness = TestHarness::with_publisher(
        MockPublisher::new().with_response(json!({"id": "777"})),
    );
    let input = resolve_input(&args(&["-l", "https://example.com"])).unwrap();

    let receipt = run_with_publisher(harness.publisher.as_ref(), &harness.config, &input)
        .await
        .unwrap();
    assert_eq!(receipt.id, "777");
    assert!(receipt.post_url.is_none());

    let payload = &harness.publisher.posts()[0].1;
    assert_eq!(payload.body, "[Link](https://example.com)");
    assert!(payload.title.is_none());
    assert!(payload.tags.is_none());
}

#[tokio::test]
async fn test_unexpected_response_is_dispatch_error() {
    let harness = TestHarness::with_publisher(MockPublisher::new().with_response(json!({})));
    let input = resolve_input(&args(&["-d", "hello"])).unwrap();

    let err = run_with_publisher(harness.publisher.as_ref(), &harness.config, &input)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Dispatch error: Unexpected response: {}");
}

#[test]
fn test_no_fields_is_validation_error() {
    let err = resolve_input(&args(&["--dry-run"])).unwrap_err();
    assert_eq!(err.category(), "validation");
}
