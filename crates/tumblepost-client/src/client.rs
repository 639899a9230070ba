//! Tumblr v2 API client.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use tumblepost_core::{Credentials, Error, PostPayload, PostingConfig, Result};

use crate::oauth::{authorization_header, Nonce};
use crate::publisher::{Identity, Publisher};

const USER_AGENT: &str = concat!("tumblepost/", env!("CARGO_PKG_VERSION"));

/// [`Publisher`] backed by the Tumblr v2 HTTP API.
///
/// Requests are signed with OAuth 1.0a using the configured credentials.
pub struct TumblrClient {
    http: reqwest::Client,
    credentials: Credentials,
    api_base: String,
}

impl TumblrClient {
    /// Create a client from resolved configuration.
    pub fn new(config: &PostingConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::dispatch_with_source("failed to build HTTP client", e))?;

        Ok(Self {
            http,
            credentials: config.credentials().clone(),
            api_base: config.api_base().to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path)
    }

    fn sign(&self, method: &str, url: &str, params: &[(String, String)]) -> Result<String> {
        authorization_header(&self.credentials, method, url, params, &Nonce::generate())
    }

    /// Read a response body as JSON, keeping the status alongside it.
    async fn read_json(response: reqwest::Response) -> Result<(reqwest::StatusCode, Value)> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::dispatch_with_source("failed to read response body", e))?;

        let body = serde_json::from_str(&text).map_err(|e| {
            Error::dispatch(format!("non-JSON response (HTTP {status}): {e}"))
        })?;
        Ok((status, body))
    }
}

/// Pull the `response` member out of a Tumblr envelope.
fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut map) => match map.remove("response") {
            Some(inner) => inner,
            None => Value::Object(map),
        },
        other => other,
    }
}

#[async_trait]
impl Publisher for TumblrClient {
    async fn authenticate(&self) -> Result<Identity> {
        let url = self.endpoint("user/info");
        let auth = self.sign("GET", &url, &[])?;

        tracing::debug!(url = %url, "Fetching user info");
        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, auth)
            .send()
            .await
            .map_err(|e| Error::dispatch_with_source("user info request failed", e))?;

        let (status, body) = Self::read_json(response).await?;
        if !status.is_success() {
            return Err(Error::dispatch(format!(
                "failed to authenticate (HTTP {status}): {body}"
            )));
        }

        let name = body
            .pointer("/response/user/name")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::dispatch(format!("user info missing account name: {body}")))?;

        Ok(Identity {
            name: name.to_string(),
        })
    }

    async fn create_text_post(&self, blog: &str, payload: &PostPayload) -> Result<Value> {
        let url = self.endpoint(&format!("blog/{blog}/post"));
        let params = payload.form_params();
        let auth = self.sign("POST", &url, &params)?;

        tracing::debug!(url = %url, "Submitting text post");
        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, auth)
            .form(&params)
            .send()
            .await
            .map_err(|e| Error::dispatch_with_source("post request failed", e))?;

        let (status, body) = Self::read_json(response).await?;
        if status.is_success() {
            Ok(unwrap_envelope(body))
        } else {
            tracing::debug!(status = %status, "Post request was not accepted");
            Ok(body)
        }
    }
}
