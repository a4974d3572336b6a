//! REST API routes (Axum)

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Response bodies.
pub mod dto;
/// Request errors.
pub mod error;
/// Request handlers.
pub mod handlers;

/// Per-router state shared by the handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Country used when a request names none.
    pub default_country: Arc<str>,
}

/// Create the REST API router
pub fn create_router(config: &ServerConfig) -> Router {
    let state = AppState {
        default_country: Arc::from(config.default_country.as_str()),
    };

    let router = Router::new()
        // Health check
        .route("/health", get(handlers::health));
    let router = if config.api_prefix.is_empty() {
        router.merge(api_routes(state))
    } else {
        router.nest(&config.api_prefix, api_routes(state))
    };

    if config.environment.request_logging() {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/isBusinessDay", get(handlers::is_business_day))
        .route("/settlementDate", get(handlers::settlement_date))
        .with_state(state)
}
