//! Command-line arguments.

use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::Parser;
use tumblepost_content::parse_comma_hashtags;
use tumblepost_core::PostDraft;

/// Post text content to a Tumblr blog.
///
/// Content comes either from a markdown file (line 1 title, line 2 hashtags,
/// the rest body) or from the individual field flags.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "tumblepost", author, version, about, long_about = None)]
#[command(after_help = "Examples:\n  \
    tumblepost --file post.md\n  \
    tumblepost -t \"Hello\" -d \"First post\" -H \"rust,cli\" --dry-run")]
pub struct Args {
    /// Read title, hashtags and body from a markdown file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Post title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Main post content
    #[arg(short, long)]
    pub description: Option<String>,

    /// URL of an inline image
    #[arg(short, long, value_name = "URL")]
    pub image_url: Option<String>,

    /// Alt text for the image
    #[arg(short, long)]
    pub alt_text: Option<String>,

    /// Main link URL
    #[arg(short, long, value_name = "URL")]
    pub link: Option<String>,

    /// Comma-separated hashtags
    #[arg(short = 'H', long, alias = "tags", value_name = "LIST")]
    pub hashtags: Option<String>,

    /// Show what would be posted without posting it
    #[arg(long)]
    pub dry_run: bool,

    /// Print progress information
    #[arg(short, long, env = "LOUD", value_parser = FalseyValueParser::new())]
    pub verbose: bool,

    /// TOML file with Tumblr credentials
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// The discrete field flags as a draft. Unset flags are empty.
    pub fn draft(&self) -> PostDraft {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        PostDraft {
            title: text(&self.title),
            description: text(&self.description),
            image_url: text(&self.image_url),
            image_alt: text(&self.alt_text),
            link: text(&self.link),
            hashtags: self
                .hashtags
                .as_deref()
                .map(parse_comma_hashtags)
                .unwrap_or_default(),
        }
    }
}
