//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
///
/// The forecast path is spelled `/wether/` with the trailing slash;
/// deployed clients depend on that exact spelling.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Landing and health endpoints
        .route("/", get(handlers::health::index))
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Forecast API
        .route("/wether/", get(handlers::forecast::today_forecast))
        // LINE webhook
        .route("/webhook/line", post(handlers::line::handle_webhook))
        // Attach state
        .with_state(state)
}
