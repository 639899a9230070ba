//! OAuth 1.0a request signing (HMAC-SHA1).
//!
//! Tumblr's v2 API authenticates user actions with OAuth 1.0a. Every request
//! carries an `Authorization: OAuth ...` header whose signature covers the
//! method, the URL, the protocol parameters, and the form body parameters.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use sha1::Sha1;
use tumblepost_core::{Credentials, Error, Result};

type HmacSha1 = Hmac<Sha1>;

/// RFC 3986 unreserved characters stay as they are; everything else is encoded.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Signature method advertised in the header.
pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";

/// Protocol version advertised in the header.
pub const OAUTH_VERSION: &str = "1.0";

/// Percent-encode a string the way OAuth 1.0a requires.
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, OAUTH_ENCODE_SET).to_string()
}

/// Per-request values that make a signature unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nonce {
    /// Random string, never reused
    pub value: String,
    /// Seconds since the Unix epoch
    pub timestamp: i64,
}

impl Nonce {
    /// A fresh nonce stamped with the current time.
    pub fn generate() -> Self {
        Self {
            value: uuid::Uuid::new_v4().simple().to_string(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// The `oauth_*` protocol parameters, without the signature.
pub fn protocol_params(credentials: &Credentials, nonce: &Nonce) -> Vec<(String, String)> {
    vec![
        (
            "oauth_consumer_key".to_string(),
            credentials.consumer_key.clone(),
        ),
        ("oauth_nonce".to_string(), nonce.value.clone()),
        (
            "oauth_signature_method".to_string(),
            SIGNATURE_METHOD.to_string(),
        ),
        ("oauth_timestamp".to_string(), nonce.timestamp.to_string()),
        ("oauth_token".to_string(), credentials.oauth_token.clone()),
        ("oauth_version".to_string(), OAUTH_VERSION.to_string()),
    ]
}

/// Build the signature base string.
///
/// Parameters are percent-encoded, sorted by key then value, and joined as
/// `k=v` pairs with `&`. `url` must not carry a query string.
pub fn signature_base_string(method: &str, url: &str, params: &[(String, String)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    encoded.sort();

    let normalized = encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        percent_encode(url),
        percent_encode(&normalized)
    )
}

/// Sign a base string with the consumer and token secrets.
pub fn sign(base_string: &str, consumer_secret: &str, token_secret: &str) -> Result<String> {
    let key = format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    );
    let mut mac = HmacSha1::new_from_slice(key.as_bytes())
        .map_err(|e| Error::dispatch(format!("invalid OAuth signing key: {e}")))?;
    mac.update(base_string.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Build the `Authorization` header value for a request.
///
/// `request_params` are the form body (or query) parameters the request
/// sends; they are signed but not placed in the header.
pub fn authorization_header(
    credentials: &Credentials,
    method: &str,
    url: &str,
    request_params: &[(String, String)],
    nonce: &Nonce,
) -> Result<String> {
    let mut oauth = protocol_params(credentials, nonce);

    let mut all_params = oauth.clone();
    all_params.extend_from_slice(request_params);
    let base = signature_base_string(method, url, &all_params);
    let signature = sign(
        &base,
        &credentials.consumer_secret,
        &credentials.oauth_token_secret,
    )?;

    oauth.push(("oauth_signature".to_string(), signature));
    oauth.sort();

    let fields = oauth
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("OAuth {fields}"))
}
