//! Post body composition.
//!
//! Builds a single markdown body out of the discrete fields of a
//! [`PostDraft`]. Up to three segments are emitted, always in this order:
//!
//! 1. the description, verbatim
//! 2. the image: an HTML `<img>` tag when alt text is given, markdown otherwise
//! 3. the link: titled with the post title, or with `Link`
//!
//! Empty segments are left out and the rest are separated by one blank line.
//! Hashtags belong to the payload, not the body, and are ignored here.

use tumblepost_core::PostDraft;

/// Separator placed between segments.
pub const SEGMENT_SEPARATOR: &str = "\n\n";

/// Alt text used for markdown images without alt text.
pub const DEFAULT_IMAGE_ALT: &str = "Image";

/// Link text used when the post has no title.
pub const DEFAULT_LINK_TEXT: &str = "Link";

/// Compose the post body from a draft.
///
/// # Example
///
/// ```rust
/// use tumblepost_content::compose_content;
/// use tumblepost_core::PostDraft;
///
/// let draft = PostDraft {
///     title: "Hi".into(),
///     link: "http://x".into(),
///     ..Default::default()
/// };
/// assert_eq!(compose_content(&draft), "[Hi](http://x)");
/// ```
pub fn compose_content(draft: &PostDraft) -> String {
    let description = (!draft.description.is_empty()).then(|| draft.description.clone());

    [
        description,
        image_markup(&draft.image_url, &draft.image_alt),
        link_markup(&draft.title, &draft.link),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(SEGMENT_SEPARATOR)
}

/// Image segment, or `None` without a URL.
///
/// The URL and alt text are embedded as given; quotes are not escaped.
pub fn image_markup(url: &str, alt: &str) -> Option<String> {
    if url.is_empty() {
        return None;
    }
    Some(if alt.is_empty() {
        format!("![{DEFAULT_IMAGE_ALT}]({url})")
    } else {
        format!(r#"<img src="{url}" alt="{alt}">"#)
    })
}

/// Link segment, or `None` without a link.
pub fn link_markup(title: &str, link: &str) -> Option<String> {
    if link.is_empty() {
        return None;
    }
    let text = if title.is_empty() {
        DEFAULT_LINK_TEXT
    } else {
        title
    };
    Some(format!("[{text}]({link})"))
}
