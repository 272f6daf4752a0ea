//! Access Control Events
//!
//! Relays RFID scan outcomes into the real-time stream.
//!
//! - `POST /api/access/scan` - report a scan (staff sessions only)

/// HTTP handlers for scan ingest
pub mod handlers;

pub use handlers::{handle_access_scan, ScanRequest, ScanResponse};
