//! Authentication Module
//!
//! Session issuance (login, password storage) belongs to the external
//! account service. This module verifies the tokens it issues and turns them
//! into a [`sessions::Session`].
//!
//! # Security
//!
//! - Tokens are HS256 JWTs signed with the configured `jwt_secret`
//! - Expired or tampered tokens are rejected
//! - Failures surface as 401 with no detail about which check failed

/// JWT claims, roles and verification keys
pub mod sessions;

pub use sessions::{Claims, Role, Session, SessionKeys};
