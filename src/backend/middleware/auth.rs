/**
 * Authentication Extractors
 *
 * Pulls the session token from the request and verifies it. The token is
 * read from `Authorization: Bearer <token>` first and from the session cookie
 * otherwise, since a browser `EventSource` cannot set request headers.
 */

use crate::backend::auth::sessions::{Session, SessionKeys};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use axum::extract::FromRequestParts;
use axum::http::{
    header::{AUTHORIZATION, COOKIE},
    request::Parts,
    HeaderMap,
};
use std::convert::Infallible;

/// Find the raw session token in the request headers
pub fn extract_token<'a>(headers: &'a HeaderMap, cookie_name: &str) -> Option<&'a str> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty());
    if bearer.is_some() {
        return bearer;
    }

    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == cookie_name && !value.is_empty())
        .map(|(_, value)| value)
}

/// Verify the caller's session
///
/// Returns 401 if the token is missing, invalid, expired, or carries a
/// malformed subject.
pub fn authenticate(
    headers: &HeaderMap,
    keys: &SessionKeys,
    cookie_name: &str,
) -> Result<Session, BackendError> {
    let token = extract_token(headers, cookie_name).ok_or_else(|| {
        tracing::warn!("[Auth] Missing session token");
        BackendError::Unauthorized
    })?;

    let claims = keys.verify_token(token).map_err(|e| {
        tracing::warn!("[Auth] Invalid token: {:?}", e);
        BackendError::Unauthorized
    })?;

    Session::try_from(claims).map_err(|e| {
        tracing::error!("[Auth] Invalid user ID in token: {:?}", e);
        BackendError::Unauthorized
    })
}

/// Extractor for routes that require a session
#[derive(Clone, Debug)]
pub struct AuthSession(pub Session);

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authenticate(&parts.headers, &state.session_keys, &state.config.session_cookie)
            .map(AuthSession)
    }
}

/// Extractor that leaves the authorization decision to the handler
#[derive(Clone, Debug)]
pub struct OptionalSession(pub Option<Session>);

impl FromRequestParts<AppState> for OptionalSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(OptionalSession(
            authenticate(&parts.headers, &state.session_keys, &state.config.session_cookie).ok(),
        ))
    }
}
