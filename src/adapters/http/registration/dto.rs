//! HTTP DTOs for registration endpoints.
//!
//! Field names follow the questionnaire front end (`nome`, `email`, `nivel`,
//! `perfil`), so the Rust names are mapped with `serde(rename)`.

use serde::{Deserialize, Serialize};

use crate::application::handlers::registration::RegisterUserCommand;
use crate::domain::user::User;

/// Message returned for every failed submission. Internals are never echoed.
pub const REGISTRATION_FAILED_MESSAGE: &str = "Erro ao processar questionário";

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Questionnaire submission. Per-question answers sent by the front end are
/// ignored; only the precomputed level is used.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "nivel", default)]
    pub level: Option<i32>,
}

impl From<RegisterRequest> for RegisterUserCommand {
    fn from(req: RegisterRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            level: req.level,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Success envelope for a processed questionnaire.
///
/// `id` addresses the new user on `GET /api/usuarios/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationResponse {
    pub success: bool,
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "perfil")]
    pub profile: String,
}

impl From<&User> for RegistrationResponse {
    fn from(user: &User) -> Self {
        Self {
            success: true,
            id: user.id().to_string(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            profile: user.profile().name().to_string(),
        }
    }
}

/// Failure envelope for a questionnaire submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationErrorResponse {
    pub success: bool,
    pub message: String,
}

impl RegistrationErrorResponse {
    pub fn generic() -> Self {
        Self {
            success: false,
            message: REGISTRATION_FAILED_MESSAGE.to_string(),
        }
    }
}

/// A registered user as returned by the lookup endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "perfil")]
    pub profile: String,
    #[serde(rename = "nivel")]
    pub level: i32,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            profile: user.profile().name().to_string(),
            level: user.profile().level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::Profile;

    #[test]
    fn register_request_deserializes_with_extra_answers() {
        let json = r#"{"nome": "Ana", "email": "ana@x.com", "nivel": 3, "pergunta1": "a", "pergunta10": "d"}"#;
        let req: RegisterRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "Ana");
        assert_eq!(req.email, "ana@x.com");
        assert_eq!(req.level, Some(3));
    }

    #[test]
    fn register_request_level_is_optional() {
        let missing: RegisterRequest =
            serde_json::from_str(r#"{"nome": "Ana", "email": "ana@x.com"}"#).unwrap();
        let null: RegisterRequest =
            serde_json::from_str(r#"{"nome": "Ana", "email": "ana@x.com", "nivel": null}"#).unwrap();
        assert_eq!(missing.level, None);
        assert_eq!(null.level, None);
    }

    #[test]
    fn register_request_converts_to_command() {
        let req = RegisterRequest {
            name: "Bob".to_string(),
            email: "bob@x.com".to_string(),
            level: None,
        };
        let cmd: RegisterUserCommand = req.into();
        assert_eq!(cmd.name, "Bob");
        assert_eq!(cmd.effective_level(), 1);
    }

    #[test]
    fn registration_response_uses_frontend_field_names() {
        let user = User::new("Bob", "bob@x.com", Profile::new("Investidor Antifrágil", 5).unwrap());
        let json = serde_json::to_value(RegistrationResponse::from(&user)).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["id"], user.id().to_string());
        assert_eq!(json["nome"], "Bob");
        assert_eq!(json["email"], "bob@x.com");
        assert_eq!(json["perfil"], "Investidor Antifrágil");
    }

    #[test]
    fn error_envelope_is_generic() {
        let json = serde_json::to_value(RegistrationErrorResponse::generic()).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], REGISTRATION_FAILED_MESSAGE);
    }
}
