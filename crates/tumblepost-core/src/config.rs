//! Runtime configuration.
//!
//! Credentials and the target blog are resolved once at process startup and
//! then passed by reference to the publisher. Nothing reads the environment
//! after that point.
//!
//! Sources, highest precedence first:
//!
//! 1. the process environment (a `.env` file is loaded into it by the binary),
//! 2. a TOML file with a `[tumblr]` table.

use crate::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable holding the OAuth consumer key.
pub const CONSUMER_KEY_VAR: &str = "TUMBLR_CONSUMER_KEY";
/// Environment variable holding the OAuth consumer secret.
pub const CONSUMER_SECRET_VAR: &str = "TUMBLR_CONSUMER_SECRET";
/// Environment variable holding the OAuth access token.
pub const OAUTH_TOKEN_VAR: &str = "TUMBLR_OAUTH_TOKEN";
/// Environment variable holding the OAuth access token secret.
pub const OAUTH_TOKEN_SECRET_VAR: &str = "TUMBLR_OAUTH_TOKEN_SECRET";
/// Environment variable naming the blog to post to.
pub const BLOG_NAME_VAR: &str = "TUMBLR_BLOG_NAME";
/// Optional override of the API base URL.
pub const API_BASE_VAR: &str = "TUMBLR_API_BASE";

/// The five values that must be present before anything is dispatched.
pub const REQUIRED_VARS: [&str; 5] = [
    CONSUMER_KEY_VAR,
    CONSUMER_SECRET_VAR,
    OAUTH_TOKEN_VAR,
    OAUTH_TOKEN_SECRET_VAR,
    BLOG_NAME_VAR,
];

/// Default Tumblr API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.tumblr.com/v2";

const PROJECT_DIR: &str = "tumblepost";
const CONFIG_FILE_NAME: &str = "config.toml";

/// OAuth 1.0a credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Application consumer key
    pub consumer_key: String,
    /// Application consumer secret
    pub consumer_secret: String,
    /// User access token
    pub oauth_token: String,
    /// User access token secret
    pub oauth_token_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("oauth_token", &"<redacted>")
            .field("oauth_token_secret", &"<redacted>")
            .finish()
    }
}

/// Contents of the `[tumblr]` table of a config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TumblrSection {
    /// See [`CONSUMER_KEY_VAR`]
    pub consumer_key: Option<String>,
    /// See [`CONSUMER_SECRET_VAR`]
    pub consumer_secret: Option<String>,
    /// See [`OAUTH_TOKEN_VAR`]
    pub oauth_token: Option<String>,
    /// See [`OAUTH_TOKEN_SECRET_VAR`]
    pub oauth_token_secret: Option<String>,
    /// See [`BLOG_NAME_VAR`]
    pub blog_name: Option<String>,
    /// See [`API_BASE_VAR`]
    pub api_base: Option<String>,
}

/// A parsed config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Tumblr credentials and target
    pub tumblr: TumblrSection,
}

impl ConfigFile {
    /// Parse a config file from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, None)
    }

    /// Read and parse a config file.
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("failed to read {}: {e}", path.display())))?;
        Self::parse(&content, Some(path))
    }

    fn parse(content: &str, path: Option<&Path>) -> Result<Self> {
        toml::from_str(content).map_err(|e| match path {
            Some(path) => Error::config(format!("invalid config file {}: {e}", path.display())),
            None => Error::config(format!("invalid config file: {e}")),
        })
    }

    /// Look up a value by its environment variable name.
    pub fn get(&self, name: &str) -> Option<&str> {
        let t = &self.tumblr;
        let value = match name {
            CONSUMER_KEY_VAR => &t.consumer_key,
            CONSUMER_SECRET_VAR => &t.consumer_secret,
            OAUTH_TOKEN_VAR => &t.oauth_token,
            OAUTH_TOKEN_SECRET_VAR => &t.oauth_token_secret,
            BLOG_NAME_VAR => &t.blog_name,
            API_BASE_VAR => &t.api_base,
            _ => return None,
        };
        value.as_deref()
    }
}

/// Configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct PostingConfig {
    credentials: Credentials,
    blog_name: String,
    api_base: String,
}

impl PostingConfig {
    /// Create a new `PostingConfig` with the default API base.
    pub fn new(credentials: Credentials, blog_name: impl Into<String>) -> Self {
        Self {
            credentials,
            blog_name: blog_name.into(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Override the API base URL.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Resolve configuration from a lookup function.
    ///
    /// Empty values count as missing. When anything required is missing the
    /// error names every missing value, in [`REQUIRED_VARS`] order.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let missing: Vec<&str> = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|name| get(name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(Error::missing_config(missing));
        }

        let required = |name: &str| get(name).unwrap_or_default();
        let credentials = Credentials {
            consumer_key: required(CONSUMER_KEY_VAR),
            consumer_secret: required(CONSUMER_SECRET_VAR),
            oauth_token: required(OAUTH_TOKEN_VAR),
            oauth_token_secret: required(OAUTH_TOKEN_SECRET_VAR),
        };

        let config = Self::new(credentials, required(BLOG_NAME_VAR));
        Ok(match get(API_BASE_VAR) {
            Some(base) => config.with_api_base(base),
            None => config,
        })
    }

    /// Resolve configuration from the process environment only.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve configuration from the environment layered over a config file.
    ///
    /// An explicit `config_path` must exist. Without one, the default path is
    /// used when a file is present there.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let file = match config_path {
            Some(path) => Some(ConfigFile::read(path)?),
            None => match default_config_path() {
                Some(path) if path.is_file() => {
                    tracing::debug!(path = %path.display(), "Reading default config file");
                    Some(ConfigFile::read(&path)?)
                }
                _ => None,
            },
        };
        Self::from_sources(|name| std::env::var(name).ok(), file.as_ref())
    }

    /// Resolve configuration from a lookup layered over an optional file.
    pub fn from_sources<F>(lookup: F, file: Option<&ConfigFile>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup(|name| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .or_else(|| file.and_then(|f| f.get(name)).map(str::to_string))
        })
    }

    /// OAuth credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Blog identifier posts are created on.
    pub fn blog_name(&self) -> &str {
        &self.blog_name
    }

    /// API base URL without a trailing slash.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

/// Platform default config file path (`<config_dir>/tumblepost/config.toml`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(PROJECT_DIR).join(CONFIG_FILE_NAME))
}
