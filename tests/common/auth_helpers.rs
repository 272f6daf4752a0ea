//! Authentication test helpers
//!
//! Builds apps with a known secret and issues tokens against it.

#![cfg(feature = "ssr")]

use axum::Router;
use courtdesk::backend::auth::{Role, Session, SessionKeys};
use courtdesk::backend::server::create_app;
use courtdesk::shared::AppConfig;
use uuid::Uuid;

/// Secret shared by the test app and the test tokens
pub const TEST_SECRET: &str = "integration-test-secret";

/// Cookie name used by the test app
pub const TEST_COOKIE: &str = "courtdesk_session";

pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .jwt_secret(TEST_SECRET)
        .session_cookie(TEST_COOKIE)
        .build()
        .expect("test config is valid")
}

/// App wired to the process-wide registry
pub fn test_app() -> Router {
    create_app(test_config())
}

pub fn session_keys() -> SessionKeys {
    SessionKeys::from_secret(TEST_SECRET)
}

/// Issue a token accepted by the test app
pub fn token_for(role: Role) -> String {
    let email = format!("test_{}@example.com", Uuid::new_v4());
    session_keys()
        .create_token(Uuid::new_v4(), email, role)
        .expect("Failed to create test token")
}

/// Verified session without going through HTTP
pub fn test_session(role: Role) -> Session {
    Session {
        user_id: Uuid::new_v4(),
        email: "desk@example.com".to_string(),
        role,
    }
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
