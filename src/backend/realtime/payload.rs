/**
 * Event Payloads
 *
 * An event is serialized to JSON once per broadcast and the text is shared
 * by every channel. The stream handler wraps each payload in an axum
 * [`Event`], which puts it on the wire as one frame:
 *
 * ```text
 * data: {"event":"connected"}\n\n
 * ```
 *
 * `serde_json` escapes control characters inside strings, so a payload never
 * contains a raw newline and each frame is exactly one `data:` line.
 */

use axum::response::sse::Event;
use serde::Serialize;
use std::sync::Arc;

/// Serialized event shared by every channel it is written to
pub type Payload = Arc<str>;

/// Greeting queued on every stream right after it is registered
pub const GREETING_PAYLOAD: &str = r#"{"event":"connected"}"#;

/// Serialize an event once for fan-out
pub fn encode_payload<T: Serialize + ?Sized>(event: &T) -> Result<Payload, serde_json::Error> {
    serde_json::to_string(event).map(Payload::from)
}

pub fn greeting() -> Payload {
    Payload::from(GREETING_PAYLOAD)
}

/// Wrap a payload as a `data:`-only server-sent event
pub fn sse_event(payload: &str) -> Event {
    Event::default().data(payload)
}
