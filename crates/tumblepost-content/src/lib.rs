//! Post content utilities: extraction from post files and body composition.
//!
//! # Modules
//!
//! - [`markdown`]: Post file parsing
//!   - [`markdown::extract`]: title, hashtags, body, image, and links
//!   - [`markdown::hashtags`]: hashtag cleanup
//! - [`compose`]: Body composition from discrete fields
//!
//! Extraction works with a handful of fixed regular expressions (two image
//! forms, one link form). There is no general markdown parsing.
//!
//! # Example
//!
//! ```rust
//! use tumblepost_content::{compose_content, extract_post_fields};
//! use tumblepost_core::PostDraft;
//!
//! let fields = extract_post_fields("Title\n#a\nSee [docs](http://d)").unwrap();
//! assert_eq!(fields.links.len(), 1);
//!
//! let draft = PostDraft {
//!     description: "Hello".into(),
//!     image_url: "http://i".into(),
//!     ..Default::default()
//! };
//! assert_eq!(compose_content(&draft), "Hello\n\n![Image](http://i)");
//! ```

pub mod compose;
pub mod markdown;

// Re-export commonly used items
pub use compose::{compose_content, image_markup, link_markup};
pub use markdown::{
    extract_image, extract_links, extract_post_fields, load_post_file, parse_comma_hashtags,
    parse_hashtag_line, ImageRef,
};
