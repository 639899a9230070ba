//! Integration tests running the full command against a mock Tumblr API.

use std::io::Write;

use serde_json::json;
use tempfile::NamedTempFile;
use tumblepost_cli::{post_with_config, resolve_input, run, Args};
use tumblepost_core::{ConfigFile, PostingConfig};
use wiremock::matchers::{body_string_contains, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::sample_post;

fn config_file(api_base: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    write!(
        file,
        r#"[tumblr]
consumer_key = "ck"
consumer_secret = "cs"
oauth_token = "tok"
oauth_token_secret = "ts"
blog_name = "fileblog"
api_base = "{api_base}"
"#
    )
    .expect("write temp config");
    file
}

/// Resolve configuration from the file alone, ignoring the process environment.
fn file_only_config(file: &NamedTempFile) -> PostingConfig {
    let file = ConfigFile::read(file.path()).expect("read temp config");
    PostingConfig::from_sources(|_| None, Some(&file)).expect("config should resolve")
}

async fn mount_user_info(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v2/user/info"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"status": 200, "msg": "OK"},
            "response": {"user": {"name": "poster"}}
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_run_posts_to_api() {
    let server = MockServer::start().await;
    mount_user_info(&server).await;
    Mock::given(method("POST"))
        .and(path("/v2/blog/fileblog/post"))
        .and(header_exists("authorization"))
        .and(body_string_contains("type=text"))
        .and(body_string_contains("format=markdown"))
        .and(body_string_contains("title=Weekend+Project"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "meta": {"status": 201, "msg": "Created"},
            "response": {"id": 4242, "post_url": "https://fileblog.tumblr.com/post/4242"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = file_only_config(&config_file(&format!("{}/v2", server.uri())));
    let post = sample_post();
    let args = Args {
        file: Some(post.path().to_path_buf()),
        ..Default::default()
    };
    let input = resolve_input(&args).unwrap();

    let receipt = post_with_config(&config, &input)
        .await
        .expect("post should succeed");
    assert_eq!(receipt.id, "4242");
    assert_eq!(
        receipt.post_url.as_deref(),
        Some("https://fileblog.tumblr.com/post/4242")
    );
}

#[tokio::test]
async fn test_full_run_surfaces_api_errors() {
    let server = MockServer::start().await;
    mount_user_info(&server).await;
    Mock::given(method("POST"))
        .and(path("/v2/blog/fileblog/post"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "meta": {"status": 400, "msg": "Bad Request"},
            "response": [],
            "errors": [{"title": "Bad Request", "code": 8001, "detail": "Post body is empty"}]
        })))
        .mount(&server)
        .await;

    let config = file_only_config(&config_file(&format!("{}/v2", server.uri())));
    let args = Args {
        description: Some("hello".to_string()),
        ..Default::default()
    };
    let input = resolve_input(&args).unwrap();

    let err = post_with_config(&config, &input).await.unwrap_err();
    assert_eq!(err.category(), "dispatch");
    assert!(err.to_string().contains("Post body is empty"));
}

#[tokio::test]
async fn test_dry_run_never_contacts_api() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = config_file(&format!("{}/v2", server.uri()));
    let args = Args {
        title: Some("T".to_string()),
        dry_run: true,
        config: Some(config.path().to_path_buf()),
        ..Default::default()
    };

    run(&args).await.expect("dry run should succeed");
}
