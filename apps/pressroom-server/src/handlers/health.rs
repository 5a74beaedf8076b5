//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub posts: usize,
    pub timestamp: String,
}

/// Health check endpoint - confirms the post store is readable.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.load().await?.len();

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        posts,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use pressroom_infra::{JsonFilePostStore, ReadErrorPolicy, StoreConfig};
    use serde_json::Value;
    use tempfile::TempDir;

    use super::*;
    use crate::handlers::configure_routes;

    async fn file_state(dir: &TempDir, contents: &str, policy: ReadErrorPolicy) -> AppState {
        let path = dir.path().join("posts.json");
        std::fs::write(&path, contents).unwrap();
        let store = JsonFilePostStore::open(StoreConfig::new(path).with_read_error_policy(policy))
            .await
            .unwrap();
        AppState::new(Arc::new(store))
    }

    #[actix_web::test]
    async fn test_health_reports_post_count() {
        let temp_dir = TempDir::new().unwrap();
        let state = file_state(&temp_dir, "[]", ReadErrorPolicy::Fail).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["posts"], 0);
    }

    #[actix_web::test]
    async fn test_unreadable_store_is_server_error_with_fail_policy() {
        let temp_dir = TempDir::new().unwrap();
        let state = file_state(&temp_dir, "garbage", ReadErrorPolicy::Fail).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_unreadable_store_reads_empty_by_default() {
        let temp_dir = TempDir::new().unwrap();
        let state = file_state(&temp_dir, "garbage", ReadErrorPolicy::EmptyCollection).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["posts"].as_array().unwrap().is_empty());
    }
}
