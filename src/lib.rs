//! courtdesk - Real-time backend for gym and court management
//!
//! Front-desk staff keep a server-push stream open; RFID access events are
//! fanned out to every connected stream as they happen.
//!
//! # Module Structure
//!
//! - **`shared`** - Types not tied to the HTTP server
//!   - Stream event model
//!   - Configuration
//!   - Error types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server
//!   - Process-wide subscriber registry and broadcaster
//!   - Session verification
//!   - RFID scan ingest
//!
//! # Wire Format
//!
//! `GET /api/events` answers with `Content-Type: text/event-stream`. Each
//! event is one frame: `data: <json>\n\n`. The first frame on every stream is
//! `data: {"event":"connected"}\n\n`.
//!
//! # Delivery
//!
//! Best effort. A subscriber that is disconnecting when an event is
//! broadcast may miss it, and nothing is replayed on reconnect.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
