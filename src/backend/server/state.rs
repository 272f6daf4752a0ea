/**
 * Application State
 *
 * `AppState` is cloned into every handler. It holds the loaded
 * configuration, the session verification keys and a handle to the
 * broadcaster. The subscriber registry itself is process-wide and is not
 * owned by the state; every `Broadcaster` clone points at the same one.
 *
 * The `FromRef` implementation lets the stream handler extract only the
 * broadcaster: `State(broadcaster): State<Broadcaster>`.
 */

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::realtime::broadcast::Broadcaster;
use crate::shared::AppConfig;
use axum::extract::FromRef;
use std::sync::Arc;

/// Shared state for all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<AppConfig>,

    /// Keys used to verify session tokens
    pub session_keys: SessionKeys,

    /// Fan-out handle over the process-wide registry
    pub broadcaster: Broadcaster,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let session_keys = SessionKeys::from_secret(&config.jwt_secret);
        Self {
            config: Arc::new(config),
            session_keys,
            broadcaster: Broadcaster::global(),
        }
    }
}

impl FromRef<AppState> for Broadcaster {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.broadcaster.clone()
    }
}
