//! Credential-injecting [`HttpClient`](super::HttpClient) wrappers.

mod api_key;
mod url_param;

pub use api_key::{ApiKey, InvalidApiKeyHeader};
pub use url_param::UrlParam;
