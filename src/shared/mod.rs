//! Shared Module
//!
//! Types that are not tied to the HTTP server: the event model pushed to
//! clients, shared error types and application configuration.

/// Real-time event model
pub mod event;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use event::{AccessDetails, StreamEvent};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
