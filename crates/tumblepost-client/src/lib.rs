//! Publishing for tumblepost.
//!
//! The driver talks to a [`Publisher`]: [`TumblrClient`] in production and
//! [`MockPublisher`] in tests. [`publish`] submits a payload through either
//! and turns the raw response into a [`PostReceipt`] or a dispatch error.
//!
//! # Example
//!
//! ```rust,no_run
//! use tumblepost_client::{publish, Publisher, TumblrClient};
//! use tumblepost_core::{PostPayload, PostingConfig};
//!
//! # async fn example() -> tumblepost_core::Result<()> {
//! let config = PostingConfig::from_env()?;
//! let client = TumblrClient::new(&config)?;
//! client.authenticate().await?;
//!
//! let payload = PostPayload::new("Hello", "First post", &["rust".to_string()]);
//! let receipt = publish(&client, &config, &payload).await?;
//! println!("{}", receipt.id);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod dispatch;
pub mod mock;
pub mod oauth;
pub mod publisher;
pub mod response;

pub use client::TumblrClient;
pub use dispatch::publish;
pub use mock::MockPublisher;
pub use publisher::{Identity, Publisher};
pub use response::{classify_response, PostOutcome, PostReceipt};
