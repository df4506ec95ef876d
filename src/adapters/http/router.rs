//! Top-level HTTP router with the shared middleware stack.

use axum::Router;
use http::{header, Method};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{ServerConfig, ValidationError};

use super::health::health_routes;
use super::profile::profile_routes;
use super::registration::registration_routes;
use super::state::AppState;

/// Builds the full API router.
///
/// Registration enforces the request timeout inside its handler so a slow
/// submission still gets the registration error envelope; the other routes
/// use `TimeoutLayer`.
///
/// Fails only when a configured CORS origin is not a valid header value.
pub fn api_router(state: AppState, server: &ServerConfig) -> Result<Router, ValidationError> {
    let cors = CorsLayer::new()
        .allow_origin(server.cors_header_values()?)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let state = state.with_registration_timeout(server.request_timeout());

    Ok(Router::new()
        .merge(health_routes())
        .merge(profile_routes())
        .layer(TimeoutLayer::new(server.request_timeout()))
        .merge(registration_routes())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}
