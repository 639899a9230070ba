//! Error types for tumblepost.

use std::path::{Path, PathBuf};

/// Errors that can occur while preparing or publishing a post.
///
/// Every variant is terminal for the run: nothing is retried, the error is
/// reported to the operator and the process exits non-zero.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// One or more required configuration values are absent.
    #[error(
        "Missing required configuration: {}\n\nSet them in the environment, in a .env file, \
         or in the [tumblr] table of the config file.\n\
         Get API credentials at: https://www.tumblr.com/oauth/apps",
        .missing.join(", ")
    )]
    MissingConfig {
        /// Names of the missing values, in canonical order
        missing: Vec<String>,
    },

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// Input file is absent or does not follow the post file convention.
    #[error("Malformed input{}: {reason}", display_path(.path.as_deref()))]
    MalformedInput {
        /// File the input came from, when there was one
        path: Option<PathBuf>,
        /// What is wrong with it
        reason: String,
    },

    /// The publisher failed, rejected the post, or answered with an unknown shape.
    #[error("Dispatch error: {message}")]
    Dispatch {
        /// Human-readable error message
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The invocation did not supply anything to post.
    #[error("Validation error: {message}")]
    Validation {
        /// What went wrong
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` type alias for tumblepost operations.
pub type Result<T> = std::result::Result<T, Error>;

fn display_path(path: Option<&Path>) -> String {
    path.map(|p| format!(" ({})", p.display()))
        .unwrap_or_default()
}

impl Error {
    /// Short name of the error family, used as a log field.
    pub fn category(&self) -> &'static str {
        match self {
            Error::MissingConfig { .. } | Error::Config { .. } => "configuration",
            Error::MalformedInput { .. } => "input",
            Error::Dispatch { .. } => "dispatch",
            Error::Validation { .. } => "validation",
            Error::Io(_) => "io",
            Error::Serialization(_) => "serialization",
        }
    }

    /// Creates a missing-configuration error from the names that were absent.
    pub fn missing_config<I, S>(missing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Error::MissingConfig {
            missing: missing.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a malformed-input error that is not tied to a file.
    pub fn malformed<S: Into<String>>(reason: S) -> Self {
        Error::MalformedInput {
            path: None,
            reason: reason.into(),
        }
    }

    /// Creates a malformed-input error for the given file.
    pub fn malformed_file<P, S>(path: P, reason: S) -> Self
    where
        P: Into<PathBuf>,
        S: Into<String>,
    {
        Error::MalformedInput {
            path: Some(path.into()),
            reason: reason.into(),
        }
    }

    /// Attaches a file path to a malformed-input error that lacks one.
    ///
    /// Other variants are returned unchanged.
    pub fn with_path<P: Into<PathBuf>>(self, path: P) -> Self {
        match self {
            Error::MalformedInput { path: None, reason } => Error::MalformedInput {
                path: Some(path.into()),
                reason,
            },
            other => other,
        }
    }

    /// Creates a new dispatch error with a message.
    pub fn dispatch<S: Into<String>>(message: S) -> Self {
        Error::Dispatch {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new dispatch error with a message and source error.
    pub fn dispatch_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Dispatch {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            message: message.into(),
        }
    }
}
