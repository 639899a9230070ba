//! # tumblepost-cli
//!
//! Command-line driver for tumblepost. Resolves where the post comes from,
//! prepares it with `tumblepost-content`, and either prints a dry-run report
//! or publishes it through a [`tumblepost_client::Publisher`].

pub mod cli;
pub mod commands;
pub mod input;
pub mod logging;

pub use cli::Args;
pub use commands::{post_with_config, run, run_with_publisher};
pub use input::{prepare_post, render_dry_run, resolve_input, PostInput, PreparedPost};
