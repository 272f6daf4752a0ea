/**
 * Server Initialization
 *
 * Builds the application state from the loaded configuration and assembles
 * the router. Tracing and the listener are set up by the binary.
 */

use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;
use axum::Router;

/// Create and configure the Axum application
///
/// Every app built in this process shares the same subscriber registry, so
/// events broadcast through one are seen by streams opened through another.
pub fn create_app(config: AppConfig) -> Router<()> {
    tracing::info!("Initializing courtdesk backend on {}", config.bind_addr);

    let app_state = AppState::new(config);
    let app = create_router(app_state);

    tracing::info!("Router configured");
    app
}
