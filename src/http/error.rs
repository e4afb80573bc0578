//! Maps [`NeoError`] onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, warn};

use crate::error::NeoError;
use crate::fetch::FetchError;

/// Error body: `{timestamp, status, error, message}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
}

/// Caller mistakes are 400; anything the provider got wrong is a gateway error.
pub fn status_for(err: &NeoError) -> StatusCode {
    match err {
        NeoError::InvalidRange { .. } | NeoError::BadRequest(_) => StatusCode::BAD_REQUEST,
        NeoError::FeedFormat(_) | NeoError::MalformedEntry { .. } => StatusCode::BAD_GATEWAY,
        NeoError::UpstreamUnavailable(FetchError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
        NeoError::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

impl IntoResponse for NeoError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if self.is_client_error() {
            warn!(error = %self, status = status.as_u16(), "Rejected request");
        } else {
            error!(error = %self, status = status.as_u16(), "Feed query failed");
        }

        let body = ErrorBody {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
