//! Submitting a prepared payload and interpreting the result.

use tumblepost_core::{PostPayload, PostingConfig, Result};

use crate::publisher::Publisher;
use crate::response::{classify_response, PostReceipt};

/// Submit `payload` to the configured blog and classify the response.
///
/// A rejected or unrecognised response becomes a dispatch error.
pub async fn publish<P>(
    publisher: &P,
    config: &PostingConfig,
    payload: &PostPayload,
) -> Result<PostReceipt>
where
    P: Publisher + ?Sized,
{
    let blog = config.blog_name();
    let tags = match &payload.tags {
        Some(tags) if !tags.is_empty() => tags.join(", "),
        _ => "None".to_string(),
    };

    tracing::info!(blog = %blog, "Creating text post");
    tracing::info!(title = payload.title.as_deref().unwrap_or(""), "Post title");
    tracing::info!(tags = %tags, "Post tags");
    tracing::info!(length = payload.content_length(), "Post content length");

    let response = publisher.create_text_post(blog, payload).await?;
    let receipt = classify_response(&response).into_receipt()?;

    tracing::info!(id = %receipt.id, "Post created");
    if let Some(url) = &receipt.post_url {
        tracing::info!(url = %url, "Post URL");
    }

    Ok(receipt)
}
