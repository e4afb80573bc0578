use crate::fetch::client::HttpClient;
use async_trait::async_trait;

/// An [`HttpClient`] wrapper that carries the API key in the query string.
///
/// NeoWs reads `api_key=<key>`. A key already present on the URL is
/// replaced, never duplicated.
pub struct UrlParam<C> {
    inner: C,
    param_name: String,
    key: String,
}

impl<C> UrlParam<C> {
    pub fn new(inner: C, param_name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            inner,
            param_name: param_name.into(),
            key: key.into(),
        }
    }

    fn apply(&self, url: &mut url::Url) {
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(name, _)| name != self.param_name.as_str())
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();

        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        pairs.extend_pairs(kept);
        pairs.append_pair(&self.param_name, &self.key);
    }
}

#[async_trait]
impl<C: HttpClient> HttpClient for UrlParam<C> {
    async fn execute(&self, mut req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        self.apply(req.url_mut());
        self.inner.execute(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    #[test]
    fn test_appends_key_after_window() {
        let auth = UrlParam::new((), "api_key", "DEMO_KEY");
        let mut url = Url::parse("https://api.nasa.gov/feed?start_date=2025-05-26").unwrap();
        auth.apply(&mut url);
        assert_eq!(
            url.as_str(),
            "https://api.nasa.gov/feed?start_date=2025-05-26&api_key=DEMO_KEY"
        );
    }

    #[test]
    fn test_replaces_existing_key() {
        let auth = UrlParam::new((), "api_key", "real");
        let mut url = Url::parse("https://api.nasa.gov/feed?api_key=stale&end_date=2025-05-27").unwrap();
        auth.apply(&mut url);
        assert_eq!(
            url.as_str(),
            "https://api.nasa.gov/feed?end_date=2025-05-27&api_key=real"
        );
    }
}
