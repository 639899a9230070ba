//! Top-level command flow.

use tumblepost_client::{publish, PostReceipt, Publisher, TumblrClient};
use tumblepost_core::{PostingConfig, Result};

use crate::cli::Args;
use crate::input::{prepare_post, render_dry_run, resolve_input, PostInput};

/// Run the command described by `args`.
///
/// A dry run prints the report to stdout and never reads credentials. A
/// normal run resolves configuration, then posts through [`TumblrClient`].
pub async fn run(args: &Args) -> Result<()> {
    let input = resolve_input(args)?;

    if args.dry_run {
        let post = prepare_post(&input)?;
        print!("{}", render_dry_run(&post));
        return Ok(());
    }

    let config = PostingConfig::load(args.config.as_deref())?;
    post_with_config(&config, &input).await?;
    Ok(())
}

/// Post `input` through a [`TumblrClient`] built from `config`.
pub async fn post_with_config(config: &PostingConfig, input: &PostInput) -> Result<PostReceipt> {
    tracing::debug!(
        blog = %config.blog_name(),
        api_base = %config.api_base(),
        "Resolved configuration"
    );
    let client = TumblrClient::new(config)?;
    run_with_publisher(&client, config, input).await
}

/// Authenticate, prepare the post and publish it.
pub async fn run_with_publisher<P>(
    publisher: &P,
    config: &PostingConfig,
    input: &PostInput,
) -> Result<PostReceipt>
where
    P: Publisher + ?Sized,
{
    let identity = publisher.authenticate().await?;
    tracing::info!(name = %identity.name, "Authenticated");

    let post = prepare_post(input)?;
    publish(publisher, config, &post.payload()).await
}
