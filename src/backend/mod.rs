//! Backend Module
//!
//! Server-side code for courtdesk: the Axum HTTP server, session
//! verification and the real-time event stream that pushes RFID access
//! events to connected receptionists.
//!
//! This module is only compiled when the `ssr` feature is enabled (on by
//! default).
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs        - Module exports and documentation
//! ├── server/       - AppState and app creation
//! ├── routes/       - Route configuration
//! ├── realtime/     - Subscriber registry, broadcaster, stream handler
//! ├── access/       - RFID scan ingest (event producer)
//! ├── auth/         - Session token verification
//! ├── middleware/   - Session extractors
//! └── error/        - Error types and HTTP conversion
//! ```
//!
//! # Thread Safety
//!
//! - The subscriber registry is a process-wide `DashMap`, safe from any task
//! - Each subscriber owns a bounded `mpsc` queue; writes never block and a
//!   full queue drops the event for that subscriber only
//! - `AppState` is cheap to clone; everything inside is `Arc`-backed

/// Server setup and state
pub mod server;

/// Route configuration
pub mod routes;

/// Real-time event stream
pub mod realtime;

/// RFID access event producer
pub mod access;

/// Backend error types
pub mod error;

/// Session verification
pub mod auth;

/// Request extractors
pub mod middleware;

pub use error::BackendError;
pub use realtime::{handle_event_stream, Broadcaster, Subscription};
pub use server::create_app;
