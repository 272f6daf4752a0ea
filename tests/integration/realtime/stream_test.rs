//! GET /api/events over the router

use crate::common::{auth_header, test_app, token_for, TEST_COOKIE};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use courtdesk::backend::auth::Role;
use courtdesk::backend::Broadcaster;
use courtdesk::shared::StreamEvent;
use futures_util::StreamExt;
use pretty_assertions::assert_eq;
use serial_test::serial;
use tower::ServiceExt;

fn events_request(credentials: Option<(header::HeaderName, String)>) -> Request<Body> {
    let mut builder = Request::get("/api/events");
    if let Some((name, value)) = credentials {
        builder = builder.header(name, value);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
#[serial]
async fn test_full_stream_cycle() {
    let broadcaster = Broadcaster::global();
    let before = broadcaster.subscriber_count();

    let token = token_for(Role::Receptionist);
    let response = test_app()
        .oneshot(events_request(Some((header::AUTHORIZATION, auth_header(&token)))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/event-stream");
    assert_eq!(response.headers()[header::CACHE_CONTROL], "no-cache");
    assert_eq!(response.headers()[header::CONNECTION], "keep-alive");
    assert_eq!(broadcaster.subscriber_count(), before + 1);

    let mut frames = response.into_body().into_data_stream();
    let greeting = frames.next().await.unwrap().unwrap();
    assert_eq!(&greeting[..], b"data: {\"event\":\"connected\"}\n\n");

    let event = StreamEvent::access(
        false,
        "DEAD01".to_string(),
        None,
        Some("Membership expired".to_string()),
    );
    let expected = format!("data: {}\n\n", serde_json::to_string(&event).unwrap());
    broadcaster.broadcast(&event);

    let frame = frames.next().await.unwrap().unwrap();
    assert_eq!(&frame[..], expected.as_bytes());

    // Client goes away.
    drop(frames);
    assert_eq!(broadcaster.subscriber_count(), before);
}

#[tokio::test]
#[serial]
async fn test_session_cookie_is_accepted() {
    let broadcaster = Broadcaster::global();
    let before = broadcaster.subscriber_count();

    let cookie = format!("theme=dark; {}={}", TEST_COOKIE, token_for(Role::Admin));
    let response = test_app()
        .oneshot(events_request(Some((header::COOKIE, cookie))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(broadcaster.subscriber_count(), before + 1);

    drop(response);
    assert_eq!(broadcaster.subscriber_count(), before);
}

#[tokio::test]
#[serial]
async fn test_missing_session_is_rejected() {
    let broadcaster = Broadcaster::global();
    let before = broadcaster.subscriber_count();

    let response = test_app().oneshot(events_request(None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(broadcaster.subscriber_count(), before);

    let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], 401);
}

#[tokio::test]
#[serial]
async fn test_forged_token_is_rejected() {
    let broadcaster = Broadcaster::global();
    let before = broadcaster.subscriber_count();

    let forged = courtdesk::backend::auth::SessionKeys::from_secret("not-the-secret")
        .create_token(uuid::Uuid::new_v4(), "x@example.com".to_string(), Role::Admin)
        .unwrap();
    let response = test_app()
        .oneshot(events_request(Some((header::AUTHORIZATION, auth_header(&forged)))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(broadcaster.subscriber_count(), before);
}
