//! Common test utilities and harness for tumblepost integration tests.

use std::io::Write;
use std::sync::Arc;

use tempfile::NamedTempFile;
use tumblepost_client::MockPublisher;
use tumblepost_core::{Credentials, PostingConfig};

/// Blog name every harness config posts to.
pub const TEST_BLOG: &str = "testblog";

/// Test harness for integration tests.
///
/// Holds a mock publisher and a configuration pointing at [`TEST_BLOG`].
pub struct TestHarness {
    /// Mock publisher for testing
    pub publisher: Arc<MockPublisher>,
    /// Resolved configuration
    pub config: PostingConfig,
}

impl TestHarness {
    /// Creates a harness whose publisher accepts every post.
    pub fn new() -> Self {
        Self::with_publisher(MockPublisher::new())
    }

    /// Creates a harness around a custom mock publisher.
    pub fn with_publisher(publisher: MockPublisher) -> Self {
        Self {
            publisher: Arc::new(publisher),
            config: test_config(),
        }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Credentials that are never sent anywhere real.
pub fn test_credentials() -> Credentials {
    Credentials {
        consumer_key: "test-consumer-key".to_string(),
        consumer_secret: "test-consumer-secret".to_string(),
        oauth_token: "test-token".to_string(),
        oauth_token_secret: "test-token-secret".to_string(),
    }
}

/// Configuration for [`TEST_BLOG`] with the default API base.
pub fn test_config() -> PostingConfig {
    PostingConfig::new(test_credentials(), TEST_BLOG)
}

/// Writes `text` to a temporary post file.
pub fn post_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp post file");
    file.write_all(text.as_bytes()).expect("write temp post file");
    file
}

/// A complete post file with an image, a link, and three tags.
pub fn sample_post() -> NamedTempFile {
    post_file(
        "Weekend Project\n\
         #rust #cli ##tumblr\n\
         Built a small poster.\n\
         \n\
         ![screenshot](https://img.example/shot.png)\n\
         \n\
         Source is [on GitHub](https://github.com/example/poster).\n",
    )
}
