pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::outreach::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Campaign setup & management
        .route(
            "/api/v1/campaigns",
            get(handlers::handle_list_campaigns).post(handlers::handle_create_campaign),
        )
        .route("/api/v1/campaigns/:id", get(handlers::handle_get_campaign))
        // Prospect analysis
        .route(
            "/api/v1/campaigns/:id/prospects",
            get(handlers::handle_list_prospects).post(handlers::handle_analyze_prospect),
        )
        .route(
            "/api/v1/prospects/:id/messages",
            get(handlers::handle_list_messages),
        )
        // Bulk message generation
        .route(
            "/api/v1/campaigns/:id/messages/bulk",
            post(handlers::handle_bulk_generate),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::test_support::{lazy_state, ScriptedGenerator};

    fn app() -> Router {
        build_router(lazy_state(Arc::new(ScriptedGenerator::new(vec![]))))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "outreach-api");
    }

    #[tokio::test]
    async fn test_create_campaign_rejects_blank_name() {
        let request = post_json(
            "/api/v1/campaigns",
            json!({
                "name": "   ",
                "product_description": "AI-powered HR automation",
                "target_industry": "SaaS",
                "outreach_goal": "Book a demo",
                "brand_voice": "Friendly"
            }),
        );

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_create_campaign_missing_prompt_field_is_rejected() {
        let request = post_json(
            "/api/v1/campaigns",
            json!({
                "name": "No voice",
                "product_description": "AI-powered HR automation",
                "target_industry": "SaaS",
                "outreach_goal": "Book a demo"
            }),
        );

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_bulk_generate_rejects_empty_prospect_list() {
        let uri = format!("/api/v1/campaigns/{}/messages/bulk", uuid::Uuid::new_v4());
        let response = app()
            .oneshot(post_json(&uri, json!({ "prospects": [] })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "prospects cannot be empty");
    }

    #[tokio::test]
    async fn test_malformed_campaign_id_is_rejected() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/campaigns/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = app()
            .oneshot(Request::builder().uri("/api/v1/analytics").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
