/**
 * Event Stream Subscription Handler
 *
 * Implements `GET /api/events`, the long-lived stream receptionists keep open
 * to see access events as they happen.
 *
 * # Connection Management
 *
 * - The caller's session is verified before anything is registered
 * - The response body is the subscriber's [`Subscription`] wrapped in
 *   axum's [`Sse`]; hyper drops it when the client disconnects, which
 *   unregisters the channel
 * - No keep-alive timer runs; the stream is idle between events
 */

use crate::backend::error::BackendError;
use crate::backend::middleware::auth::OptionalSession;
use crate::backend::realtime::broadcast::Broadcaster;
use crate::backend::realtime::payload::sse_event;
use axum::{
    extract::State,
    http::header::CONNECTION,
    response::{IntoResponse, Sse},
};
use futures_util::StreamExt;
use std::convert::Infallible;

/// Handle an event stream subscription (GET /api/events)
///
/// # Headers
///
/// - `Authorization: Bearer <token>` or the session cookie - required
///
/// # Returns
///
/// A streaming response that starts with the greeting and then carries
/// every broadcast event. `Sse` sets `Content-Type: text/event-stream` and
/// `Cache-Control: no-cache`.
///
/// # Errors
///
/// * `401 Unauthorized` - If no valid session is presented
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 200 OK
/// Content-Type: text/event-stream
/// Cache-Control: no-cache
/// Connection: keep-alive
///
/// data: {"event":"connected"}
///
/// data: {"event":"access_granted","message":"...","card_uid":"04A1B2","timestamp":"..."}
/// ```
pub async fn handle_event_stream(
    State(broadcaster): State<Broadcaster>,
    OptionalSession(session): OptionalSession,
) -> Result<impl IntoResponse, BackendError> {
    tracing::info!("[Realtime] Subscription request received");

    let subscription = broadcaster.connect(session.as_ref())?;
    let events = subscription.map(|payload| Ok::<_, Infallible>(sse_event(&payload)));

    Ok(([(CONNECTION, "keep-alive")], Sse::new(events)))
}
