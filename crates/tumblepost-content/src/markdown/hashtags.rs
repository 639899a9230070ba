//! Hashtag cleanup.
//!
//! Tags arrive in two shapes: the whitespace-separated second line of a post
//! file, and the comma-separated `--hashtags` flag. Both accept an optional
//! leading `#` on each tag. Order is kept, case is kept, duplicates are kept.

/// Strip leading `#` characters and surrounding whitespace from one tag.
///
/// # Example
///
/// ```rust
/// use tumblepost_content::markdown::hashtags::clean_hashtag;
///
/// assert_eq!(clean_hashtag("##rust"), "rust");
/// assert_eq!(clean_hashtag("  #cli "), "cli");
/// assert_eq!(clean_hashtag("#"), "");
/// ```
pub fn clean_hashtag(token: &str) -> &str {
    token.trim().trim_start_matches('#').trim()
}

/// Parse the hashtag line of a post file.
///
/// # Example
///
/// ```rust
/// use tumblepost_content::markdown::hashtags::parse_hashtag_line;
///
/// assert_eq!(parse_hashtag_line("#a ##b  c"), vec!["a", "b", "c"]);
/// assert!(parse_hashtag_line("   ").is_empty());
/// ```
pub fn parse_hashtag_line(line: &str) -> Vec<String> {
    line.split_whitespace()
        .map(clean_hashtag)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a comma-separated hashtag list.
///
/// # Example
///
/// ```rust
/// use tumblepost_content::markdown::hashtags::parse_comma_hashtags;
///
/// assert_eq!(parse_comma_hashtags("#a, b ,,#c"), vec!["a", "b", "c"]);
/// assert_eq!(parse_comma_hashtags("two words, x"), vec!["two words", "x"]);
/// ```
pub fn parse_comma_hashtags(list: &str) -> Vec<String> {
    list.split(',')
        .map(clean_hashtag)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
