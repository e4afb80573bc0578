//! Outbound HTTP transport.
//!
//! [`HttpClient`] is the seam every request goes through; [`auth`] wraps a
//! client to attach credentials, and [`fetch_bytes`] normalizes transport
//! failures into [`FetchError`].

mod basic;
mod client;
pub mod auth;

pub use basic::BasicClient;
pub use client::HttpClient;

use thiserror::Error;
use tracing::debug;
use url::Url;

/// Transport-level failure while talking to the feed provider.
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS, connection, TLS or body-read failure.
    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),
    /// The request exceeded the client's timeout.
    #[error("request timed out")]
    Timeout,
    /// The provider answered with a non-2xx status.
    #[error("provider returned HTTP {status}")]
    HttpStatus { status: u16 },
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Network(err)
        }
    }
}

/// Issues a `GET` for `url` through `client` and returns the response body.
///
/// # Errors
///
/// Fails on transport errors, timeouts, and any non-2xx status.
pub async fn fetch_bytes<C: HttpClient + ?Sized>(client: &C, url: Url) -> Result<Vec<u8>, FetchError> {
    let req = reqwest::Request::new(reqwest::Method::GET, url);

    let resp = client.execute(req).await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus {
            status: status.as_u16(),
        });
    }

    let bytes = resp.bytes().await?;
    debug!(bytes = bytes.len(), "Response body received");
    Ok(bytes.to_vec())
}
