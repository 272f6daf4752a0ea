/**
 * Real-time Event Types
 *
 * This module defines the events pushed to connected staff clients over the
 * event stream. Events are tagged under the `event` key so the client can
 * dispatch on a single field:
 *
 * ```json
 * {"event":"connected"}
 * {"event":"access_granted","message":"...","member_id":"...","card_uid":"...","timestamp":"..."}
 * ```
 *
 * The broadcaster treats every event as opaque serialized bytes; this enum is
 * only the boundary producers build against.
 */
use serde::{Deserialize, Serialize};

/// Event delivered to every connected stream
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StreamEvent {
    /// Greeting written once into each freshly opened stream
    Connected,
    /// A card was accepted at an RFID reader
    AccessGranted(AccessDetails),
    /// A card was rejected at an RFID reader
    AccessDenied(AccessDetails),
    /// Free-form staff notification
    Notification {
        message: String,
        timestamp: String,
    },
}

/// Fields shared by both access outcomes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessDetails {
    /// Human-readable description shown in the receptionist feed
    pub message: String,
    /// Member the card belongs to, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
    /// Raw card identifier as read by the reader
    pub card_uid: String,
    /// RFC 3339 time of the scan
    pub timestamp: String,
}

impl StreamEvent {
    /// Create an access event for a card scan
    ///
    /// Falls back to a generic message when the producer did not supply one.
    pub fn access(
        granted: bool,
        card_uid: String,
        member_id: Option<String>,
        message: Option<String>,
    ) -> Self {
        let message = message.unwrap_or_else(|| {
            if granted {
                format!("Access granted for card {}", card_uid)
            } else {
                format!("Access denied for card {}", card_uid)
            }
        });

        let details = AccessDetails {
            message,
            member_id,
            card_uid,
            timestamp: get_timestamp(),
        };

        if granted {
            Self::AccessGranted(details)
        } else {
            Self::AccessDenied(details)
        }
    }

    /// Create a notification event
    pub fn notification(message: impl Into<String>) -> Self {
        Self::Notification {
            message: message.into(),
            timestamp: get_timestamp(),
        }
    }

    /// Wire name of the event, used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::AccessGranted(_) => "access_granted",
            Self::AccessDenied(_) => "access_denied",
            Self::Notification { .. } => "notification",
        }
    }
}

/// Get the current timestamp as an RFC3339 string
fn get_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}
