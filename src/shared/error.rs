//! Shared Error Types
//!
//! Input validation failures detected outside the HTTP layer, for example
//! when a scan report carries an unusable card UID. The backend turns them
//! into `400 Bad Request`.
//!
//! ```rust
//! use courtdesk::shared::error::SharedError;
//!
//! let error = SharedError::validation("card_uid", "Card UID cannot be empty");
//! assert_eq!(error.to_string(), "Invalid card_uid: Card UID cannot be empty");
//! ```
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A field was rejected before anything was broadcast
    #[error("Invalid {field}: {message}")]
    ValidationError {
        field: &'static str,
        message: String,
    },
}

impl SharedError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field,
            message: message.into(),
        }
    }
}
