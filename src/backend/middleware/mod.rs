//! Middleware Module
//!
//! Request processing shared by handlers. Currently only session
//! extraction:
//!
//! - **`auth`** - `AuthSession` / `OptionalSession` extractors

pub mod auth;

pub use auth::{authenticate, extract_token, AuthSession, OptionalSession};
