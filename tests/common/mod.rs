use axum::body::Body;
use axum::http::{Request, Response};
use tower::ServiceExt;

use bfhl::api::router::create_router;
use bfhl::config::{AppConfig, LogFormat};
use bfhl::models::Identity;
use bfhl::AppState;

pub const TEST_USER_ID: &str = "jane_doe_01011990";
pub const TEST_EMAIL: &str = "jane@example.com";
pub const TEST_ROLL_NUMBER: &str = "ABC123";

/// Router wired with a fixed identity and a detached metrics recorder.
pub fn build_test_app() -> axum::Router {
    let config = AppConfig {
        host: "127.0.0.1".into(),
        port: 0,
        identity: Identity {
            user_id: TEST_USER_ID.into(),
            email: TEST_EMAIL.into(),
            roll_number: TEST_ROLL_NUMBER.into(),
        },
        log_format: LogFormat::Text,
    };

    let state = AppState {
        config,
        metrics_handle: bfhl::metrics::detached_handle(),
    };

    create_router(state)
}

/// POST a raw body to /api/bfhl with a JSON content type.
#[allow(dead_code)]
pub async fn post_bfhl(app: axum::Router, body: impl Into<Body>) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/bfhl")
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn read_json(resp: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}
