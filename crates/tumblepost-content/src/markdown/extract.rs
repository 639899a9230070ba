//! Post file extraction.
//!
//! A post file follows a three-part convention:
//!
//! ```text
//! Title of the post
//! #hashtags #separated by-whitespace
//! Body in markdown, possibly with ![alt](image) and [links](url)
//! ```
//!
//! The body is kept verbatim. The first image and every link are read out of
//! it with a small fixed set of patterns; no markdown parser is involved.

use std::borrow::Cow;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tumblepost_core::{Error, Link, PostFields, Result};

use super::hashtags::parse_hashtag_line;

/// Minimum number of lines in a post file: title, hashtags, body.
pub const MIN_POST_LINES: usize = 3;

static MARKDOWN_IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("Invalid markdown image regex")
});

static HTML_IMG_SRC_FIRST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<img[^>]+src=["']([^"']+)["'][^>]*alt=["']([^"']*)["'][^>]*>"#)
        .expect("Invalid HTML img (src, alt) regex")
});

static HTML_IMG_ALT_FIRST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<img[^>]+alt=["']([^"']*)["'][^>]*src=["']([^"']+)["'][^>]*>"#)
        .expect("Invalid HTML img (alt, src) regex")
});

// The optional leading `!` lets image syntax be matched and skipped.
static MARKDOWN_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(!?)\[([^\]]+)\]\(([^)]+)\)").expect("Invalid markdown link regex")
});

/// An image reference found in a post body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageRef {
    /// Image source; empty when no image was found
    pub url: String,
    /// Alt text; may be empty even when an image was found
    pub alt: String,
}

impl ImageRef {
    /// Whether an image was found.
    pub fn is_found(&self) -> bool {
        !self.url.is_empty()
    }
}

/// Parse the text of a post file into [`PostFields`].
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] when the text has fewer than three lines.
///
/// # Example
///
/// ```rust
/// use tumblepost_content::markdown::extract_post_fields;
///
/// let fields = extract_post_fields("Title\n#a #b\nBody with [a link](http://x)").unwrap();
/// assert_eq!(fields.title, "Title");
/// assert_eq!(fields.hashtags, vec!["a", "b"]);
/// assert_eq!(fields.links[0].url, "http://x");
/// ```
pub fn extract_post_fields(text: &str) -> Result<PostFields> {
    let text = normalize_line_endings(text);
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    if lines.len() < MIN_POST_LINES {
        return Err(Error::malformed(format!(
            "post file must have at least {MIN_POST_LINES} lines: title, hashtags, and content \
             (found {})",
            lines.len()
        )));
    }

    let title = lines[0].trim().to_string();
    let hashtags = parse_hashtag_line(lines[1]);
    let body = lines[2..].concat().trim().to_string();

    let image = extract_image(&body);
    let links = extract_links(&body);

    tracing::debug!(
        title = %title,
        hashtags = hashtags.len(),
        image = image.is_found(),
        links = links.len(),
        "Extracted post fields"
    );

    Ok(PostFields {
        title,
        body,
        hashtags,
        image_url: image.url,
        image_alt: image.alt,
        links,
    })
}

/// Turn `\r\n` and lone `\r` line endings into `\n`.
fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Read a post file from disk and extract its fields.
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] carrying the path when the file does not
/// exist or is too short, and [`Error::Io`] when it cannot be read.
pub fn load_post_file(path: &Path) -> Result<PostFields> {
    if !path.exists() {
        return Err(Error::malformed_file(path, "File not found"));
    }

    let text = std::fs::read_to_string(path)?;
    extract_post_fields(&text).map_err(|e| e.with_path(path))
}

/// Find the image to feature in a post body.
///
/// Patterns are tried in priority order, each over the whole body:
///
/// 1. markdown `![alt](url)`
/// 2. `<img ... src="..." ... alt="...">`
/// 3. `<img ... alt="..." ... src="...">`
///
/// The first pattern that matches anywhere wins, and only its first match is
/// used.
///
/// # Example
///
/// ```rust
/// use tumblepost_content::markdown::extract_image;
///
/// let body = r#"<img src="http://html" alt="h"> then ![md](http://md)"#;
/// let image = extract_image(body);
/// assert_eq!(image.url, "http://md");
/// assert_eq!(image.alt, "md");
/// ```
pub fn extract_image(body: &str) -> ImageRef {
    if let Some(caps) = MARKDOWN_IMAGE_RE.captures(body) {
        return ImageRef {
            alt: caps[1].to_string(),
            url: caps[2].to_string(),
        };
    }

    if let Some(caps) = HTML_IMG_SRC_FIRST_RE.captures(body) {
        return ImageRef {
            url: caps[1].to_string(),
            alt: caps[2].to_string(),
        };
    }

    if let Some(caps) = HTML_IMG_ALT_FIRST_RE.captures(body) {
        return ImageRef {
            alt: caps[1].to_string(),
            url: caps[2].to_string(),
        };
    }

    ImageRef::default()
}

/// Collect every markdown link `[text](url)` in document order.
///
/// Image syntax `![alt](url)` is not a link. Link markup produced by the
/// composer is indistinguishable from an authored link and is collected too.
///
/// # Example
///
/// ```rust
/// use tumblepost_content::markdown::extract_links;
///
/// let links = extract_links("![pic](http://img) [one](http://1) and [two](http://2)");
/// let urls: Vec<&str> = links.iter().map(|l| l.url.as_str()).collect();
/// assert_eq!(urls, vec!["http://1", "http://2"]);
/// ```
pub fn extract_links(body: &str) -> Vec<Link> {
    MARKDOWN_LINK_RE
        .captures_iter(body)
        .filter(|caps| caps[1].is_empty())
        .map(|caps| Link::new(&caps[2], &caps[3]))
        .collect()
}
