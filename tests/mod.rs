//! Test suite for courtdesk
//!
//! This module organizes all integration tests

#[cfg(feature = "ssr")]
pub mod integration;
