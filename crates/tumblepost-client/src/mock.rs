//! In-memory publisher for tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::{json, Value};
use tumblepost_core::{Error, PostPayload, Result};

use crate::publisher::{Identity, Publisher};

/// A scripted reply to `create_text_post`.
#[derive(Debug, Clone)]
enum Reply {
    Response(Value),
    Failure(String),
}

/// A [`Publisher`] that records what it is sent and replays scripted replies.
///
/// Replies are consumed in order. Once the script runs out, every post
/// succeeds with a sequential id.
#[derive(Debug)]
pub struct MockPublisher {
    identity: String,
    reject_auth: bool,
    replies: Mutex<VecDeque<Reply>>,
    posts: Mutex<Vec<(String, PostPayload)>>,
    auth_calls: AtomicUsize,
}

impl MockPublisher {
    /// A publisher that authenticates as `mock-user` and accepts every post.
    pub fn new() -> Self {
        Self {
            identity: "mock-user".to_string(),
            reject_auth: false,
            replies: Mutex::new(VecDeque::new()),
            posts: Mutex::new(Vec::new()),
            auth_calls: AtomicUsize::new(0),
        }
    }

    /// Authenticate as `name`.
    pub fn with_identity(mut self, name: impl Into<String>) -> Self {
        self.identity = name.into();
        self
    }

    /// Fail every `authenticate` call.
    pub fn rejecting_auth(mut self) -> Self {
        self.reject_auth = true;
        self
    }

    /// Queue a raw response object.
    pub fn with_response(self, response: Value) -> Self {
        lock(&self.replies).push_back(Reply::Response(response));
        self
    }

    /// Queue a transport failure.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        lock(&self.replies).push_back(Reply::Failure(message.into()));
        self
    }

    /// Every `(blog, payload)` pair submitted so far.
    pub fn posts(&self) -> Vec<(String, PostPayload)> {
        lock(&self.posts).clone()
    }

    /// Number of `authenticate` calls.
    pub fn auth_calls(&self) -> usize {
        self.auth_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockPublisher {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl Publisher for MockPublisher {
    async fn authenticate(&self) -> Result<Identity> {
        self.auth_calls.fetch_add(1, Ordering::SeqCst);
        if self.reject_auth {
            return Err(Error::dispatch("failed to authenticate (HTTP 401)"));
        }
        Ok(Identity {
            name: self.identity.clone(),
        })
    }

    async fn create_text_post(&self, blog: &str, payload: &PostPayload) -> Result<Value> {
        let count = {
            let mut posts = lock(&self.posts);
            posts.push((blog.to_string(), payload.clone()));
            posts.len()
        };

        match lock(&self.replies).pop_front() {
            Some(Reply::Response(value)) => Ok(value),
            Some(Reply::Failure(message)) => Err(Error::dispatch(message)),
            None => Ok(json!({
                "id": count,
                "post_url": format!("https://{blog}.tumblr.com/post/{count}")
            })),
        }
    }
}
