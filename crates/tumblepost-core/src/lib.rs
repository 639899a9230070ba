//! Tumblepost core: shared types, errors, and configuration.
//!
//! This crate provides the foundational types used across all tumblepost
//! crates. It has no internal tumblepost dependencies.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`types`]: Post fields, drafts, and the outbound payload
//! - [`config`]: Credentials and target resolved at startup

pub mod config;
pub mod error;
pub mod types;

// Re-export key types at crate root for convenience
pub use config::{ConfigFile, Credentials, PostingConfig};
pub use error::{Error, Result};
pub use types::{Link, PostDraft, PostFields, PostPayload};
