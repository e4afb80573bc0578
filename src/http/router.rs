use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Create the application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let asteroids = Router::new()
        .route("/asteroids", get(handlers::get_all_asteroids))
        .route("/asteroids/simplify", get(handlers::get_simplified_asteroids))
        .route("/asteroids/top-dangerous", get(handlers::get_top_dangerous_asteroids));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", asteroids)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::service::AsteroidService;
    use crate::services::feed_api::FeedApi;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::NaiveDate;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct FixedFeed(Value);

    #[async_trait::async_trait]
    impl FeedApi for FixedFeed {
        async fn fetch_feed(&self, _: &str, _: &str) -> Result<Vec<u8>> {
            Ok(self.0.to_string().into_bytes())
        }
    }

    fn asteroid(name: &str, hazardous: bool, km: f64) -> Value {
        json!({
            "name": name,
            "is_potentially_hazardous_asteroid": hazardous,
            "estimated_diameter": {
                "kilometers": { "estimated_diameter_min": km, "estimated_diameter_max": km }
            },
            "close_approach_data": [{
                "relative_velocity": { "kilometers_per_hour": "40000.0" },
                "orbiting_body": "Earth"
            }]
        })
    }

    fn app() -> Router {
        let feed = FixedFeed(json!({
            "element_count": 4,
            "near_earth_objects": {
                "2025-05-26": [asteroid("Small", true, 1.0), asteroid("Huge", false, 9.0)],
                "2025-05-27": [asteroid("Big", true, 4.0), asteroid("Mid", true, 2.0)],
                "2025-05-28": [asteroid("Tiny", true, 0.1)]
            }
        }));
        let today = NaiveDate::from_ymd_opt(2025, 5, 26).unwrap();
        let service = AsteroidService::new(Arc::new(feed)).with_today(today);
        create_router(AppState::new(service))
    }

    async fn get(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_raw_passthrough() {
        let (status, body) = get("/api/v1/asteroids?days=3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["element_count"], 4);
        assert_eq!(body["near_earth_objects"]["2025-05-27"][0]["name"], "Big");
    }

    #[tokio::test]
    async fn test_simplify_lists_everything() {
        let (status, body) = get("/api/v1/asteroids/simplify?days=2").await;
        assert_eq!(status, StatusCode::OK);
        let list = body.as_array().unwrap();
        assert_eq!(list.len(), 5);
        assert_eq!(list[0]["name"], "Small");
        assert_eq!(list[1]["diameter"], 9.0);
        assert_eq!(list[2]["date"], "2025-05-27");
        assert_eq!(list[2]["planet"], "Earth");
        assert_eq!(list[2]["speed"], 40000.0);
    }

    #[tokio::test]
    async fn test_top_dangerous_excludes_safe_giant() {
        let (status, body) = get("/api/v1/asteroids/top-dangerous?days=5").await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Big", "Mid", "Small"]);
    }

    #[tokio::test]
    async fn test_out_of_range_days_is_bad_request() {
        for uri in [
            "/api/v1/asteroids?days=0",
            "/api/v1/asteroids/simplify?days=8",
            "/api/v1/asteroids/top-dangerous?days=-1",
        ] {
            let (status, body) = get(uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["status"], 400);
            assert_eq!(body["error"], "Bad Request");
            assert!(body["message"].as_str().unwrap().contains("between 1 and 7"));
        }
    }

    #[tokio::test]
    async fn test_unreadable_days_is_structured_bad_request() {
        for uri in [
            "/api/v1/asteroids",
            "/api/v1/asteroids/simplify?days=abc",
            "/api/v1/asteroids/top-dangerous?days=99999999999999999999",
        ] {
            let (status, body) = get(uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["status"], 400, "{uri}");
            assert_eq!(body["error"], "Bad Request", "{uri}");
            assert!(body["timestamp"].is_string(), "{uri}");
            assert!(body["message"].as_str().unwrap().contains("days"), "{uri}");
        }
    }
}
