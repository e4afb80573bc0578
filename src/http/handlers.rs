//! HTTP handlers; each delegates straight to the service layer.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::{Deserialize, Serialize};

use super::state::AppState;
use crate::asteroids::AsteroidRecord;
use crate::error::NeoError;
use crate::parser::RawFeedEnvelope;

pub type HandlerResult<T> = Result<Json<T>, NeoError>;

#[derive(Debug, Deserialize)]
pub struct DaysQuery {
    pub days: i64,
}

/// A `?days=` query that failed to bind becomes a structured 400.
type DaysParam = Result<Query<DaysQuery>, QueryRejection>;

fn days(param: DaysParam) -> Result<i64, NeoError> {
    param
        .map(|Query(query)| query.days)
        .map_err(|rejection| NeoError::BadRequest(rejection.body_text()))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// GET /api/v1/asteroids?days=N
///
/// The provider's feed as received, for debugging and full-fidelity clients.
pub async fn get_all_asteroids(
    State(state): State<AppState>,
    param: DaysParam,
) -> HandlerResult<RawFeedEnvelope> {
    Ok(Json(state.service.get_raw(days(param)?).await?))
}

/// GET /api/v1/asteroids/simplify?days=N
pub async fn get_simplified_asteroids(
    State(state): State<AppState>,
    param: DaysParam,
) -> HandlerResult<Vec<AsteroidRecord>> {
    Ok(Json(state.service.get_simplified(days(param)?).await?))
}

/// GET /api/v1/asteroids/top-dangerous?days=N
///
/// At most three hazardous asteroids, largest average diameter first.
pub async fn get_top_dangerous_asteroids(
    State(state): State<AppState>,
    param: DaysParam,
) -> HandlerResult<Vec<AsteroidRecord>> {
    Ok(Json(state.service.get_top_hazardous(days(param)?).await?))
}
