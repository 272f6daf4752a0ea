//! GET /health and fallback

use crate::common::{test_app, test_session};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use courtdesk::backend::auth::Role;
use courtdesk::backend::routes::HealthResponse;
use courtdesk::backend::Broadcaster;
use serial_test::serial;
use tower::ServiceExt;

#[tokio::test]
#[serial]
async fn test_health_reports_subscribers() {
    let broadcaster = Broadcaster::global();
    let _subscription = broadcaster.connect(Some(&test_session(Role::Receptionist))).unwrap();
    let expected = broadcaster.subscriber_count();

    let response = test_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
    let health: HealthResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.subscribers, expected);
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let response = test_app()
        .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Not found");
}
