//! Server Module
//!
//! Application state and router assembly.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs   - Module exports and documentation
//! ├── state.rs - AppState and FromRef implementations
//! └── init.rs  - App creation
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use courtdesk::backend::server::create_app;
//! use courtdesk::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
//! axum::serve(listener, create_app(config)).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use init::create_app;
pub use state::AppState;
