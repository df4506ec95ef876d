//! HTTP routes for registration endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{get_user, register};

/// Creates the registration router.
///
/// Routes:
/// - `POST /api/processar` - Register a questionnaire submission
/// - `GET /api/usuarios/:id` - Fetch a registered user
pub fn registration_routes() -> Router<AppState> {
    Router::new()
        .route("/api/processar", post(register))
        .route("/api/usuarios/:id", get(get_user))
}
