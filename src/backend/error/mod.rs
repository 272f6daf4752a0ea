//! Backend Error Module
//!
//! Error types raised by handlers and the broadcaster, and their conversion
//! into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Types
//!
//! - `Unauthorized` - missing or invalid session (401)
//! - `Forbidden` - role not allowed (403)
//! - `HandlerError` - request-specific failure with its own status
//! - `SharedError` - input validation from the shared module (400)

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::BackendError;
