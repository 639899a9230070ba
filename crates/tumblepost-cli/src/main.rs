//! tumblepost
//!
//! Post text content to a Tumblr blog.

#![forbid(unsafe_code)]

use std::process::ExitCode;

use clap::Parser;
use tumblepost_cli::{logging, run, Args};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env before parsing so LOUD can come from it.
    let env_file = dotenvy::dotenv().ok();
    let args = Args::parse();
    logging::init(args.verbose);

    if let Some(path) = env_file {
        tracing::info!(path = %path.display(), "Loaded environment variables");
    }

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(category = e.category(), "{e}");
            ExitCode::FAILURE
        }
    }
}
