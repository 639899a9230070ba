//! Integration tests for dry runs.

use tumblepost_cli::{prepare_post, render_dry_run, resolve_input, run, Args};

use crate::common::sample_post;

#[tokio::test]
async fn test_dry_run_needs_no_configuration() {
    let file = sample_post();
    let args = Args {
        file: Some(file.path().to_path_buf()),
        dry_run: true,
        config: Some("/nonexistent/tumblepost/config.toml".into()),
        ..Default::default()
    };

    // The config path is never read on a dry run.
    run(&args).await.expect("dry run should succeed");
}

#[tokio::test]
async fn test_dry_run_without_input_fails_validation() {
    let args = Args {
        dry_run: true,
        ..Default::default()
    };
    let err = run(&args).await.unwrap_err();
    assert_eq!(err.category(), "validation");
}

#[test]
fn test_dry_run_report_for_file() {
    let file = sample_post();
    let args = Args {
        file: Some(file.path().to_path_buf()),
        dry_run: true,
        ..Default::default()
    };
    let post = prepare_post(&resolve_input(&args).unwrap()).unwrap();
    let report = render_dry_run(&post);

    assert!(report.starts_with("--- DRY RUN ---\nTitle: Weekend Project\nTags: rust, cli, tumblr\n"));
    assert!(report.contains(&format!(
        "Content length: {} characters\n",
        post.content.chars().count()
    )));
    assert!(report.contains("Content:\nBuilt a small poster."));
    assert!(report.ends_with("--- END DRY RUN ---\n"));
}

#[tokio::test]
async fn test_missing_config_file_fails_normal_run() {
    let file = sample_post();
    let args = Args {
        file: Some(file.path().to_path_buf()),
        config: Some("/nonexistent/tumblepost/config.toml".into()),
        ..Default::default()
    };
    let err = run(&args).await.unwrap_err();
    assert_eq!(err.category(), "configuration");
}
