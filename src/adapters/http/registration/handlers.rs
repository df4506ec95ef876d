//! HTTP handlers for registration endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_domain_error, ErrorResponse};
use crate::adapters::http::state::AppState;
use crate::application::handlers::registration::GetUserQuery;
use crate::domain::foundation::UserId;

use super::dto::{RegisterRequest, RegistrationErrorResponse, RegistrationResponse, UserResponse};

/// POST /api/processar - Register a questionnaire submission
///
/// Every failure, including a malformed body or a timeout, answers 400 with
/// the generic error envelope.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(req) => req,
        Err(rejection) => {
            tracing::warn!("Rejected questionnaire body: {}", rejection.body_text());
            return registration_failed();
        }
    };

    let handler = state.register_user_handler();
    let outcome =
        tokio::time::timeout(state.registration_timeout, handler.handle(req.into())).await;

    match outcome {
        Ok(Ok(result)) => {
            let response = RegistrationResponse::from(&result.user);
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Failed to process questionnaire");
            registration_failed()
        }
        Err(_) => {
            tracing::error!(
                timeout_secs = state.registration_timeout.as_secs(),
                "Questionnaire processing timed out"
            );
            registration_failed()
        }
    }
}

/// GET /api/usuarios/:id - Fetch a registered user
pub async fn get_user(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let user_id = match id.parse::<UserId>() {
        Ok(user_id) => user_id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid user ID")),
            )
                .into_response()
        }
    };

    match state.get_user_handler().handle(GetUserQuery { user_id }).await {
        Ok(user) => (StatusCode::OK, Json(UserResponse::from(&user))).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

fn registration_failed() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(RegistrationErrorResponse::generic()),
    )
        .into_response()
}
