//! HTTP routes for profile endpoints.

use axum::{routing::get, Router};

use crate::adapters::http::state::AppState;

use super::handlers::{get_profile_details, list_profiles};

/// Creates the profile router.
///
/// Routes:
/// - `GET /api/perfil/:nome` - Describe a catalog profile
/// - `GET /api/perfis` - List the catalog
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/api/perfil/:nome", get(get_profile_details))
        .route("/api/perfis", get(list_profiles))
}
