//! Integration tests against the public API and the HTTP router
//!
//! Every test here touches the process-wide subscriber registry, so they run
//! under `#[serial]`.

mod realtime;
