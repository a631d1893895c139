//! Shared plumbing for calls to upstream HTTP APIs.

use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::future::Future;
use url::Url;

/// Errors surfaced by upstream API calls
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("API key is not configured")]
    MissingApiKey,

    #[error("invalid upstream URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("upstream request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("upstream returned status {status}")]
    Status {
        status: StatusCode,
        /// Raw upstream body, kept for server-side logging only
        body: String,
    },

    #[error("invalid upstream response: {0}")]
    InvalidBody(&'static str),
}

/// Issues a GET and parses the body as JSON.
///
/// Any non-success status is an error before parsing is attempted, so a
/// malformed error page can never be mistaken for data.
pub async fn get_json(client: &Client, url: Url) -> Result<Value, UpstreamError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(UpstreamError::Status { status, body });
    }

    let value = response.json::<Value>().await?;
    Ok(value)
}

/// Awaits two upstream calls together, failing as soon as either fails.
///
/// Both results are required; there is no partial-result path.
pub async fn gather<A, B, T, U>(a: A, b: B) -> Result<(T, U), UpstreamError>
where
    A: Future<Output = Result<T, UpstreamError>>,
    B: Future<Output = Result<U, UpstreamError>>,
{
    tokio::try_join!(a, b)
}
