//! Publisher response classification.

use serde_json::Value;
use tumblepost_core::{Error, Result};

/// What a publisher response means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostOutcome {
    /// The response carried an `id`.
    Created {
        /// Identifier of the new post
        id: String,
        /// Public URL, when the service returned one
        post_url: Option<String>,
    },
    /// The response carried an `errors` collection.
    Rejected {
        /// One human-readable entry per reported error
        details: Vec<String>,
    },
    /// Anything else, rendered verbatim.
    Unexpected {
        /// The response as JSON text
        raw: String,
    },
}

/// A successfully created post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostReceipt {
    /// Identifier of the new post
    pub id: String,
    /// Public URL, when the service returned one
    pub post_url: Option<String>,
}

impl PostOutcome {
    /// Turn the outcome into a receipt, or a dispatch error describing it.
    pub fn into_receipt(self) -> Result<PostReceipt> {
        match self {
            PostOutcome::Created { id, post_url } => Ok(PostReceipt { id, post_url }),
            PostOutcome::Rejected { details } => Err(Error::dispatch(format!(
                "Failed to create post:\n  {}",
                details.join("\n  ")
            ))),
            PostOutcome::Unexpected { raw } => {
                Err(Error::dispatch(format!("Unexpected response: {raw}")))
            }
        }
    }
}

/// Classify a publisher response.
///
/// An `id` field means success and takes precedence over `errors`. Each
/// error's `detail` is passed through as-is; errors without one are rendered
/// as JSON.
pub fn classify_response(response: &Value) -> PostOutcome {
    if let Some(id) = response.get("id") {
        return PostOutcome::Created {
            id: render(id),
            post_url: response.get("post_url").map(render),
        };
    }

    if let Some(errors) = response.get("errors") {
        let details = match errors {
            Value::Array(items) => items.iter().map(error_detail).collect(),
            other => vec![render(other)],
        };
        return PostOutcome::Rejected { details };
    }

    PostOutcome::Unexpected {
        raw: response.to_string(),
    }
}

fn error_detail(error: &Value) -> String {
    error
        .get("detail")
        .map(render)
        .unwrap_or_else(|| error.to_string())
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
