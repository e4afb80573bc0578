use async_trait::async_trait;
use std::time::Instant;
use tracing::{debug, warn};
use url::Url;

use crate::config::{ConfigError, FeedAuth, NeoWsConfig};
use crate::error::Result;
use crate::fetch::auth::{ApiKey, UrlParam};
use crate::fetch::{BasicClient, HttpClient, fetch_bytes};
use crate::services::feed_api::FeedApi;

/// NASA NeoWs `/feed` client.
pub struct NeoWsClient<C> {
    http: C,
    base_url: Url,
}

impl<C: HttpClient> NeoWsClient<C> {
    /// `http` is expected to attach the API key itself (see [`crate::fetch::auth`]).
    pub fn new(http: C, base_url: Url) -> Self {
        Self { http, base_url }
    }

    fn feed_url(&self, start_date: &str, end_date: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("start_date", start_date)
            .append_pair("end_date", end_date);
        url
    }
}

impl NeoWsClient<Box<dyn HttpClient>> {
    /// Builds a timeout-bounded client that authenticates the way `config` says.
    pub fn from_config(config: &NeoWsConfig) -> std::result::Result<Self, ConfigError> {
        let basic = BasicClient::new(config.timeout, config.connect_timeout)?;

        let http: Box<dyn HttpClient> = match &config.auth {
            FeedAuth::UrlParam { param_name } => {
                Box::new(UrlParam::new(basic, param_name.as_str(), config.api_key.as_str()))
            }
            FeedAuth::Header { header_name } => {
                Box::new(ApiKey::new(basic, header_name, &config.api_key)?)
            }
        };

        Ok(Self::new(http, config.base_url.clone()))
    }
}

#[async_trait]
impl<C: HttpClient> FeedApi for NeoWsClient<C> {
    #[tracing::instrument(skip(self))]
    async fn fetch_feed(&self, start_date: &str, end_date: &str) -> Result<Vec<u8>> {
        let url = self.feed_url(start_date, end_date);
        debug!(url = %url, "Requesting NeoWs feed");

        let fetch_start = Instant::now();
        let bytes = fetch_bytes(&self.http, url).await.inspect_err(|e| {
            warn!(error = %e, "NeoWs fetch failed");
        })?;

        let elapsed = fetch_start.elapsed();
        if elapsed.as_secs() > 5 {
            warn!(elapsed_ms = elapsed.as_millis() as u64, "NeoWs fetch was slow");
        }
        debug!(bytes = bytes.len(), elapsed_ms = elapsed.as_millis() as u64, "NeoWs feed received");
        Ok(bytes)
    }
}
