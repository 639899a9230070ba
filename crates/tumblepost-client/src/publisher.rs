//! The publishing capability the driver depends on.

use async_trait::async_trait;
use serde_json::Value;
use tumblepost_core::{PostPayload, Result};

/// Identity of the account a publisher is authenticated as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Account name
    pub name: String,
}

/// A service text posts can be published to.
///
/// Implement this for each backend. [`crate::TumblrClient`] talks to the real
/// API; [`crate::MockPublisher`] replays scripted responses.
///
/// `create_text_post` returns the raw response object. Deciding whether it
/// means success is left to [`crate::classify_response`].
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Check the credentials and return who they belong to.
    async fn authenticate(&self) -> Result<Identity>;

    /// Submit a text post to `blog`.
    async fn create_text_post(&self, blog: &str, payload: &PostPayload) -> Result<Value>;
}
