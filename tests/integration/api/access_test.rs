//! POST /api/access/scan

use crate::common::{auth_header, test_app, token_for};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use courtdesk::backend::auth::Role;
use courtdesk::backend::Broadcaster;
use futures_util::StreamExt;
use serial_test::serial;
use tower::ServiceExt;

fn scan_request(token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder =
        Request::post("/api/access/scan").header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, auth_header(token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn json_body(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), 4096).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
#[serial]
async fn test_scan_reaches_open_stream() {
    let app = test_app();
    let stream = app
        .clone()
        .oneshot(
            Request::get("/api/events")
                .header(header::AUTHORIZATION, auth_header(&token_for(Role::Receptionist)))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let mut frames = stream.into_body().into_data_stream();
    frames.next().await.unwrap().unwrap();

    let subscribers = Broadcaster::global().subscriber_count();
    let token = token_for(Role::Receptionist);
    let response = app
        .oneshot(scan_request(
            Some(&token),
            serde_json::json!({"card_uid": "04A1B2", "granted": true, "member_id": "m-42"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert_eq!(json_body(response).await["delivered"], subscribers);

    let frame = frames.next().await.unwrap().unwrap();
    let text = std::str::from_utf8(&frame).unwrap();
    let payload: serde_json::Value =
        serde_json::from_str(text.strip_prefix("data: ").unwrap().trim_end()).unwrap();
    assert_eq!(payload["event"], "access_granted");
    assert_eq!(payload["card_uid"], "04A1B2");
    assert_eq!(payload["member_id"], "m-42");
}

#[tokio::test]
#[serial]
async fn test_member_cannot_report_scans() {
    let token = token_for(Role::Member);
    let response = test_app()
        .oneshot(scan_request(
            Some(&token),
            serde_json::json!({"card_uid": "04A1B2", "granted": true}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[serial]
async fn test_blank_card_uid_rejected() {
    let token = token_for(Role::Admin);
    let response = test_app()
        .oneshot(scan_request(
            Some(&token),
            serde_json::json!({"card_uid": "  ", "granted": false}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("card_uid"));
}

#[tokio::test]
#[serial]
async fn test_scan_requires_session() {
    let response = test_app()
        .oneshot(scan_request(
            None,
            serde_json::json!({"card_uid": "04A1B2", "granted": true}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
