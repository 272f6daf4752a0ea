/**
 * RFID Scan Ingest
 *
 * `POST /api/access/scan` is the producer side of the event stream: the
 * front-desk reader bridge reports each card scan here and the outcome is
 * pushed to every connected receptionist.
 *
 * Whether a card *should* be granted is decided upstream; this handler only
 * relays the decision.
 */

use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthSession;
use crate::backend::realtime::broadcast::Broadcaster;
use crate::shared::{SharedError, StreamEvent};
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

/// Longest card UID accepted from a reader
pub const MAX_CARD_UID_LEN: usize = 64;

/// Scan reported by a reader
#[derive(Debug, Clone, Deserialize)]
pub struct ScanRequest {
    pub card_uid: String,
    pub granted: bool,
    #[serde(default)]
    pub member_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ScanRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        let uid = self.card_uid.trim();
        if uid.is_empty() {
            return Err(SharedError::validation("card_uid", "Card UID cannot be empty"));
        }
        if uid.len() > MAX_CARD_UID_LEN {
            return Err(SharedError::validation(
                "card_uid",
                format!("Card UID longer than {} characters", MAX_CARD_UID_LEN),
            ));
        }
        Ok(())
    }

    pub fn into_event(self) -> StreamEvent {
        StreamEvent::access(
            self.granted,
            self.card_uid.trim().to_string(),
            self.member_id,
            self.message,
        )
    }
}

/// Result of relaying a scan
#[derive(Debug, Serialize, Deserialize)]
pub struct ScanResponse {
    /// Subscribers the event was queued for
    pub delivered: usize,
}

/// Handle a card scan (POST /api/access/scan)
///
/// # Errors
///
/// * `401 Unauthorized` - No valid session
/// * `403 Forbidden` - Session role is not staff
/// * `400 Bad Request` - Empty or oversized card UID
pub async fn handle_access_scan(
    State(broadcaster): State<Broadcaster>,
    AuthSession(session): AuthSession,
    Json(request): Json<ScanRequest>,
) -> Result<(StatusCode, Json<ScanResponse>), BackendError> {
    if !session.role.is_staff() {
        tracing::warn!("[Access] {} may not report scans", session.email);
        return Err(BackendError::Forbidden);
    }

    request.validate()?;

    let event = request.into_event();
    tracing::info!("[Access] {} reported by {}", event.name(), session.email);

    let delivered = broadcaster.broadcast(&event);
    Ok((StatusCode::ACCEPTED, Json(ScanResponse { delivered })))
}
