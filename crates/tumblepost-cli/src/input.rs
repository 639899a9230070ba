//! Input resolution and post preparation.

use std::path::PathBuf;

use tumblepost_content::{compose_content, load_post_file};
use tumblepost_core::{Error, PostDraft, PostPayload, Result};

use crate::cli::Args;

const NO_INPUT: &str = "no post content given; use --file, or at least one of --title, \
    --description, --image-url, --alt-text, --link, --hashtags";

/// Where the post comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostInput {
    /// A markdown post file
    File(PathBuf),
    /// Discrete field flags
    Fields(PostDraft),
}

/// Decide which input the arguments describe.
///
/// `--file` wins over field flags. With neither, this is a validation error.
pub fn resolve_input(args: &Args) -> Result<PostInput> {
    if let Some(path) = &args.file {
        return Ok(PostInput::File(path.clone()));
    }

    let draft = args.draft();
    if draft.is_empty() {
        return Err(Error::validation(NO_INPUT));
    }
    Ok(PostInput::Fields(draft))
}

/// Title, tags and body ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedPost {
    /// Post title, possibly empty
    pub title: String,
    /// Tags in input order
    pub tags: Vec<String>,
    /// Post body
    pub content: String,
}

impl PreparedPost {
    /// Body length in characters.
    pub fn content_length(&self) -> usize {
        self.content.chars().count()
    }

    /// The payload a publisher receives.
    pub fn payload(&self) -> PostPayload {
        PostPayload::new(&self.title, self.content.clone(), &self.tags)
    }
}

/// Turn an input into a post.
///
/// File bodies are used as they are. Field input goes through the composer.
pub fn prepare_post(input: &PostInput) -> Result<PreparedPost> {
    match input {
        PostInput::File(path) => {
            tracing::info!(path = %path.display(), "Reading post file");
            let fields = load_post_file(path)?;
            tracing::info!(path = %path.display(), "Parsed post file");

            if let Some(url) = fields.first_link_url() {
                tracing::info!(url = %url, "Found link");
            }
            if fields.has_image() {
                tracing::debug!(url = %fields.image_url, alt = %fields.image_alt, "Found image");
            }

            Ok(PreparedPost {
                title: fields.title,
                tags: fields.hashtags,
                content: fields.body,
            })
        }
        PostInput::Fields(draft) => Ok(PreparedPost {
            title: draft.title.clone(),
            tags: draft.hashtags.clone(),
            content: compose_content(draft),
        }),
    }
}

/// The dry-run report for a prepared post.
pub fn render_dry_run(post: &PreparedPost) -> String {
    let tags = if post.tags.is_empty() {
        "None".to_string()
    } else {
        post.tags.join(", ")
    };

    let mut out = String::new();
    out.push_str("--- DRY RUN ---\n");
    out.push_str(&format!("Title: {}\n", post.title));
    out.push_str(&format!("Tags: {tags}\n"));
    out.push_str(&format!(
        "Content length: {} characters\n",
        post.content_length()
    ));
    out.push_str(&format!("Content:\n{}\n", post.content));
    out.push_str("--- END DRY RUN ---\n");
    out
}
