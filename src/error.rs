//! Error taxonomy for feed queries.
//!
//! Every variant is terminal for the request that produced it; nothing here is
//! retried and no partial result accompanies an error.

use thiserror::Error;

use crate::fetch::FetchError;

pub type Result<T> = std::result::Result<T, NeoError>;

#[derive(Debug, Error)]
pub enum NeoError {
    /// Caller asked for a window the provider does not serve.
    #[error("the 'days' parameter must be between 1 and 7, got {days}")]
    InvalidRange { days: i64 },

    /// Request could not be read, e.g. `days` missing or not an integer.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Payload was not JSON, or lacked the date-grouped collection.
    #[error("feed format error: {0}")]
    FeedFormat(String),

    /// One entry lacked a required field; the whole extraction is abandoned.
    #[error("malformed entry #{index} under {date}: missing or invalid '{field_path}'")]
    MalformedEntry {
        date: String,
        index: usize,
        field_path: String,
    },

    /// The provider could not be reached or answered with an error status.
    #[error("feed provider unavailable: {0}")]
    UpstreamUnavailable(#[from] FetchError),
}

impl NeoError {
    /// `true` for errors caused by the caller rather than the provider.
    pub fn is_client_error(&self) -> bool {
        matches!(self, NeoError::InvalidRange { .. } | NeoError::BadRequest(_))
    }
}
