//! Trait for the near-Earth-object feed provider.

use crate::error::Result;
use crate::parser::{RawFeedEnvelope, parse_feed};

/// Abstraction over a date-windowed NEO feed provider (e.g., NASA NeoWs).
///
/// Dates are `YYYY-MM-DD`. Implementations own transport concerns (auth,
/// timeouts) and report them as [`NeoError::UpstreamUnavailable`](crate::error::NeoError::UpstreamUnavailable).
#[async_trait::async_trait]
pub trait FeedApi: Send + Sync {
    /// Returns the undecoded feed payload for the window.
    async fn fetch_feed(&self, start_date: &str, end_date: &str) -> Result<Vec<u8>>;

    /// Returns the feed already decoded into an envelope.
    async fn fetch_envelope(&self, start_date: &str, end_date: &str) -> Result<RawFeedEnvelope> {
        let bytes = self.fetch_feed(start_date, end_date).await?;
        parse_feed(&bytes)
    }
}
