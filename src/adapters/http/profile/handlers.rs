//! HTTP handlers for profile endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::handle_domain_error;
use crate::adapters::http::state::AppState;
use crate::application::handlers::profile::GetProfileDetailsQuery;

use super::dto::{ProfileDetailsResponse, ProfileSummaryResponse};

/// GET /api/perfil/:nome - Describe a catalog profile
pub async fn get_profile_details(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    let query = GetProfileDetailsQuery { name };

    match state.profile_details_handler().handle(query).await {
        Ok(details) => {
            (StatusCode::OK, Json(ProfileDetailsResponse::from(details))).into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}

/// GET /api/perfis - List the catalog
pub async fn list_profiles(State(state): State<AppState>) -> Response {
    match state.catalog.profiles().await {
        Ok(profiles) => {
            let body: Vec<ProfileSummaryResponse> =
                profiles.iter().map(ProfileSummaryResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}
