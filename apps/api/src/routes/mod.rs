pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assessment API
        .route(
            "/api/v1/assessment/quadrants",
            get(handlers::handle_list_quadrants).post(handlers::handle_quadrants),
        )
        .route(
            "/api/v1/assessment/quadrants/:key",
            get(handlers::handle_get_quadrant),
        )
        .route(
            "/api/v1/assessment/riasec-pattern",
            post(handlers::handle_riasec_pattern),
        )
        .route("/api/v1/assessment/report", post(handlers::handle_report))
        .route(
            "/api/v1/assessment/career-match",
            post(handlers::handle_career_match),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::assessment::careers::RiasecCareerMatcher;
    use crate::assessment::config::AssessmentConfig;
    use crate::config::Config;

    fn test_state() -> AppState {
        AppState {
            config: Config {
                port: 0,
                rust_log: "info".to_string(),
                assessment_config_path: None,
                default_locale: None,
                career_recommendation_limit: 5,
            },
            assessment: Arc::new(AssessmentConfig::embedded().unwrap()),
            career_matcher: Arc::new(RiasecCareerMatcher),
        }
    }

    async fn send(method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(b) => builder
                .header("content-type", "application/json")
                .body(Body::from(b.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = build_router(test_state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn traits_json() -> Value {
        json!({
            "openness": 80,
            "conscientiousness": 20,
            "extraversion": 50,
            "agreeableness": 50,
            "neuroticism": 10
        })
    }

    fn interests_json() -> Value {
        json!({
            "realistic": 90,
            "investigative": 10,
            "artistic": 80,
            "social": 70,
            "enterprising": 5,
            "conventional": 1
        })
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send("GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_quadrants_endpoint() {
        let (status, body) = send(
            "POST",
            "/api/v1/assessment/quadrants",
            Some(json!({ "traits": traits_json(), "locale": "id" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["locale"], "id");
        assert_eq!(body["quadrants"].as_array().unwrap().len(), 6);
        assert_eq!(body["quadrants"][0]["title"], "Pemecahan Masalah");
    }

    #[tokio::test]
    async fn test_out_of_range_trait_is_bad_request() {
        let mut traits = traits_json();
        traits["openness"] = json!(150);
        let (status, body) = send(
            "POST",
            "/api/v1/assessment/quadrants",
            Some(json!({ "traits": traits })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_locale_is_bad_request() {
        let (status, _) = send(
            "POST",
            "/api/v1/assessment/quadrants",
            Some(json!({ "traits": traits_json(), "locale": "fr" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_riasec_pattern_endpoint() {
        let (status, body) = send(
            "POST",
            "/api/v1/assessment/riasec-pattern",
            Some(json!({ "interests": interests_json(), "top_n": 3 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["short_pattern"], "RAS");
        assert_eq!(body["full_pattern"], "Realistic-Artistic-Social");
    }

    #[tokio::test]
    async fn test_riasec_pattern_rejects_zero_top_n() {
        let (status, _) = send(
            "POST",
            "/api/v1/assessment/riasec-pattern",
            Some(json!({ "interests": interests_json(), "top_n": 0 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_report_endpoint() {
        let (status, body) = send(
            "POST",
            "/api/v1/assessment/report",
            Some(json!({ "interests": interests_json(), "traits": traits_json() })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["riasec"]["short_pattern"], "RAS");
        let summary = body["report"]["summary"].as_str().unwrap();
        assert!(summary.contains("High Openness"), "summary was {summary}");
        assert!(!body["report"]["strengths"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_career_match_endpoint() {
        let (status, body) = send(
            "POST",
            "/api/v1/assessment/career-match",
            Some(json!({
                "interests": interests_json(),
                "traits": traits_json(),
                "careers": [
                    { "id": "00000000-0000-0000-0000-000000000001", "title": "Data Clerk", "riasec_tags": ["C"] },
                    { "id": "00000000-0000-0000-0000-000000000002", "title": "Carpenter", "riasec_tags": ["R", "A"] }
                ],
                "limit": 1
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matcher_backend"], "riasec");
        let recs = body["recommendations"].as_array().unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0]["title"], "Carpenter");
        assert_eq!(recs[0]["match_score"], 85);
    }

    #[tokio::test]
    async fn test_career_match_requires_careers() {
        let (status, body) = send(
            "POST",
            "/api/v1/assessment/career-match",
            Some(json!({
                "interests": interests_json(),
                "traits": traits_json(),
                "careers": []
            })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
    }

    #[tokio::test]
    async fn test_career_match_zero_limit_rejected() {
        let (status, body) = send(
            "POST",
            "/api/v1/assessment/career-match",
            Some(json!({
                "interests": interests_json(),
                "traits": traits_json(),
                "careers": [
                    { "id": "00000000-0000-0000-0000-000000000002", "title": "Carpenter", "riasec_tags": ["R"] }
                ],
                "limit": 0
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_list_and_get_quadrants() {
        let (status, body) = send("GET", "/api/v1/assessment/quadrants", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[5]["key"], "task_management");

        let (status, body) = send("GET", "/api/v1/assessment/quadrants/teamwork?locale=id", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Kerja Sama Tim");
        assert_eq!(body["labels"][0], "Leader");

        let (status, _) = send("GET", "/api/v1/assessment/quadrants/unknown", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
