//! Post file parsing.
//!
//! - [`extract`]: title, hashtags, body, image, and links from a post file
//! - [`hashtags`]: hashtag cleanup for file and command-line input
//!
//! # Example
//!
//! ```rust
//! use tumblepost_content::markdown::extract_post_fields;
//!
//! let text = "Title\n#a #b\nBody text\n![alt](http://img)\n[go](http://link)";
//! let fields = extract_post_fields(text).unwrap();
//!
//! assert_eq!(fields.image_url, "http://img");
//! assert_eq!(fields.image_alt, "alt");
//! assert_eq!(fields.first_link_url(), Some("http://link"));
//! ```

pub mod extract;
pub mod hashtags;

pub use extract::{
    extract_image, extract_links, extract_post_fields, load_post_file, ImageRef, MIN_POST_LINES,
};
pub use hashtags::{clean_hashtag, parse_comma_hashtags, parse_hashtag_line};
