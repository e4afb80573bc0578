//! The three asteroid queries: raw, simplified, and top hazardous.
//!
//! Each query validates `days` before any network call, fetches the feed once
//! for `[today, today + days]`, and transforms it in memory.

use chrono::{Days, Local, NaiveDate};
use std::sync::Arc;
use tracing::info;

use crate::asteroids::rank::TOP_HAZARDOUS_LIMIT;
use crate::asteroids::{AsteroidRecord, extract, rank_top};
use crate::error::{NeoError, Result};
use crate::parser::{RawFeedEnvelope, parse_feed};
use crate::services::feed_api::FeedApi;

/// Smallest window the provider serves, in days.
pub const MIN_DAYS: i64 = 1;
/// Largest window the provider serves, in days.
pub const MAX_DAYS: i64 = 7;

/// Checks that `days` is within `[MIN_DAYS, MAX_DAYS]`.
pub fn validate_days(days: i64) -> Result<u64> {
    if (MIN_DAYS..=MAX_DAYS).contains(&days) {
        Ok(days as u64)
    } else {
        Err(NeoError::InvalidRange { days })
    }
}

/// Inclusive feed window; `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Window from `today` to `today + days`, rejecting out-of-range `days`.
    pub fn ahead(today: NaiveDate, days: i64) -> Result<Self> {
        let offset = validate_days(days)?;
        let end = today
            .checked_add_days(Days::new(offset))
            .ok_or(NeoError::InvalidRange { days })?;
        Ok(Self { start: today, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// `start` formatted as the provider expects (`YYYY-MM-DD`).
    pub fn start_param(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    /// `end` formatted as the provider expects (`YYYY-MM-DD`).
    pub fn end_param(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

#[derive(Clone)]
pub struct AsteroidService {
    feed: Arc<dyn FeedApi>,
    fixed_today: Option<NaiveDate>,
}

impl AsteroidService {
    pub fn new(feed: Arc<dyn FeedApi>) -> Self {
        Self {
            feed,
            fixed_today: None,
        }
    }

    /// Pins "today" instead of reading the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.fixed_today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.fixed_today
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Window for `days`, validated before any request is made.
    pub fn window(&self, days: i64) -> Result<DateRange> {
        DateRange::ahead(self.today(), days)
    }

    async fn fetch_parsed(&self, range: &DateRange) -> Result<RawFeedEnvelope> {
        let bytes = self
            .feed
            .fetch_feed(&range.start_param(), &range.end_param())
            .await?;
        parse_feed(&bytes)
    }

    /// The provider's envelope, untouched.
    #[tracing::instrument(skip(self))]
    pub async fn get_raw(&self, days: i64) -> Result<RawFeedEnvelope> {
        let range = self.window(days)?;
        let envelope = self
            .feed
            .fetch_envelope(&range.start_param(), &range.end_param())
            .await?;
        info!(
            start_date = %range.start(),
            end_date = %range.end(),
            buckets = envelope.bucket_count(),
            "Raw feed served"
        );
        Ok(envelope)
    }

    /// Every asteroid in the window, flattened, in extraction order.
    #[tracing::instrument(skip(self))]
    pub async fn get_simplified(&self, days: i64) -> Result<Vec<AsteroidRecord>> {
        let range = self.window(days)?;
        let envelope = self.fetch_parsed(&range).await?;
        let records = extract(&envelope, false)?;
        info!(
            start_date = %range.start(),
            end_date = %range.end(),
            records = records.len(),
            "Simplified feed served"
        );
        Ok(records)
    }

    /// The largest hazardous asteroids in the window, largest first.
    #[tracing::instrument(skip(self))]
    pub async fn get_top_hazardous(&self, days: i64) -> Result<Vec<AsteroidRecord>> {
        let range = self.window(days)?;
        let envelope = self.fetch_parsed(&range).await?;
        let hazardous = extract(&envelope, true)?;
        let candidates = hazardous.len();
        let top = rank_top(hazardous, TOP_HAZARDOUS_LIMIT);
        info!(
            start_date = %range.start(),
            end_date = %range.end(),
            candidates,
            returned = top.len(),
            "Top hazardous asteroids served"
        );
        Ok(top)
    }
}
