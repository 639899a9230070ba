//! Post data types shared by the extractor, composer, and publisher.

use serde::Serialize;

/// Post type sent with every payload.
pub const TEXT_POST_TYPE: &str = "text";

/// Body format sent with every payload.
pub const MARKDOWN_FORMAT: &str = "markdown";

/// A markdown link found in a post body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Link text between the brackets
    pub text: String,
    /// Target between the parentheses
    pub url: String,
}

impl Link {
    /// Create a link from its text and target.
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }
}

/// Structured fields extracted from a post file.
///
/// The body keeps whatever markup it was written with; the image and link
/// fields are read out of it, not removed from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFields {
    /// First line of the file, trimmed
    pub title: String,
    /// Everything from the third line on, trimmed
    pub body: String,
    /// Tags from the second line, in the order written
    pub hashtags: Vec<String>,
    /// Source of the first image found, empty when there is none
    pub image_url: String,
    /// Alt text of that image
    pub image_alt: String,
    /// Every markdown link in the body, in document order
    pub links: Vec<Link>,
}

impl PostFields {
    /// URL of the first link in the body, if any.
    pub fn first_link_url(&self) -> Option<&str> {
        self.links.first().map(|l| l.url.as_str())
    }

    /// Whether an image reference was found.
    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }
}

/// Discrete post fields supplied on the command line.
///
/// Empty strings mean "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    /// Post title, also used as the link text
    pub title: String,
    /// Main content
    pub description: String,
    /// Inline image URL
    pub image_url: String,
    /// Alt text for the inline image
    pub image_alt: String,
    /// Main link URL
    pub link: String,
    /// Tags attached to the post
    pub hashtags: Vec<String>,
}

impl PostDraft {
    /// Whether any field carries a value.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.description.is_empty()
            && self.image_url.is_empty()
            && self.image_alt.is_empty()
            && self.link.is_empty()
            && self.hashtags.is_empty()
    }
}

/// The outbound text post handed to a publisher.
///
/// Serializes as `{type, format, body, title?, tags?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostPayload {
    /// Always [`TEXT_POST_TYPE`]
    #[serde(rename = "type")]
    pub post_type: &'static str,
    /// Always [`MARKDOWN_FORMAT`]
    pub format: &'static str,
    /// Composed post body
    pub body: String,
    /// Present only when a non-empty title was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Present only when at least one tag was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl PostPayload {
    /// Build a payload, dropping an empty title and an empty tag list.
    pub fn new(title: &str, body: impl Into<String>, tags: &[String]) -> Self {
        Self {
            post_type: TEXT_POST_TYPE,
            format: MARKDOWN_FORMAT,
            body: body.into(),
            title: (!title.is_empty()).then(|| title.to_string()),
            tags: (!tags.is_empty()).then(|| tags.to_vec()),
        }
    }

    /// Flatten the payload into form parameters, tags joined by commas.
    pub fn form_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("type".to_string(), self.post_type.to_string()),
            ("format".to_string(), self.format.to_string()),
            ("body".to_string(), self.body.clone()),
        ];
        if let Some(title) = &self.title {
            params.push(("title".to_string(), title.clone()));
        }
        if let Some(tags) = &self.tags {
            params.push(("tags".to_string(), tags.join(",")));
        }
        params
    }

    /// Body length in characters.
    pub fn content_length(&self) -> usize {
        self.body.chars().count()
    }
}
