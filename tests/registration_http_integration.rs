//! Integration tests for the questionnaire HTTP API.
//!
//! These tests drive the full router (middleware included) against the
//! in-memory repositories:
//! 1. Submissions resolve to the shared catalog profile for their level
//! 2. Failures answer with the generic error envelope
//! 3. Registered users and catalog profiles can be read back

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use investor_profile::adapters::http::{api_router, AppState};
use investor_profile::adapters::memory::{InMemoryProfileRepository, InMemoryUserRepository};
use investor_profile::config::ServerConfig;
use investor_profile::ports::ProfileRepository;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    profiles: Arc<InMemoryProfileRepository>,
    users: Arc<InMemoryUserRepository>,
}

impl TestApp {
    fn new() -> Self {
        let profiles = Arc::new(InMemoryProfileRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let state = AppState::new(profiles.clone(), users.clone());
        let router = api_router(state, &ServerConfig::default()).unwrap();
        Self {
            router,
            profiles,
            users,
        }
    }

    async fn seeded() -> Self {
        let app = Self::new();
        let state = AppState::new(app.profiles.clone(), app.users.clone());
        state.catalog.seed_defaults().await.unwrap();
        app
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn submit(&self, body: Value) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method("POST")
                .uri("/api/processar")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn submission_without_level_registers_minimal_profile() {
    let app = TestApp::new();

    let (status, body) = app
        .submit(json!({"nome": "Ana", "email": "ana@x.com", "pergunta1": "b"}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["nome"], "Ana");
    assert_eq!(body["email"], "ana@x.com");
    assert_eq!(body["perfil"], "Minimal");
    assert!(body["id"].is_string());
    assert_eq!(app.profiles.count().await.unwrap(), 1);
    assert_eq!(app.users.len().await, 1);
}

#[tokio::test]
async fn repeated_level_reuses_one_catalog_row() {
    let app = TestApp::new();

    for name in ["Bob", "Carla", "Davi"] {
        let (status, body) = app
            .submit(json!({"nome": name, "email": "x@x.com", "nivel": 5}))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["perfil"], "Investidor Antifrágil");
    }

    assert_eq!(app.profiles.count().await.unwrap(), 1);
    assert_eq!(app.users.len().await, 3);
}

#[tokio::test]
async fn submission_after_seeding_creates_no_new_profiles() {
    let app = TestApp::seeded().await;

    let (status, body) = app
        .submit(json!({"nome": "Eva", "email": "eva@x.com", "nivel": 3}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["perfil"], "Sofisticado II");
    assert_eq!(app.profiles.count().await.unwrap(), 5);
}

#[tokio::test]
async fn out_of_range_level_falls_back_to_minimal() {
    let app = TestApp::new();

    let (status, body) = app
        .submit(json!({"nome": "Fia", "email": "fia@x.com", "nivel": 42}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["perfil"], "Minimal");
}

#[tokio::test]
async fn malformed_submission_returns_generic_error() {
    let app = TestApp::new();

    let (status, body) = app
        .send(
            Request::builder()
                .method("POST")
                .uri("/api/processar")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"success": false, "message": "Erro ao processar questionário"})
    );
    assert!(app.users.is_empty().await);
}

#[tokio::test]
async fn registration_binds_user_to_catalog_row() {
    let app = TestApp::new();
    app.submit(json!({"nome": "Gil", "email": "gil@x.com", "nivel": 4}))
        .await;

    let (_, profiles) = app.get("/api/perfis").await;
    assert_eq!(profiles.as_array().unwrap().len(), 1);

    let profile = app
        .profiles
        .find_by_name("Sofisticado III")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(profile.level(), 4);
    assert_eq!(profiles[0]["id"], profile.id().to_string());
}

#[tokio::test]
async fn registered_user_can_be_read_back_by_returned_id() {
    let app = TestApp::new();

    let (status, registered) = app
        .submit(json!({"nome": "Ivo", "email": "ivo@x.com", "nivel": 2}))
        .await;
    assert_eq!(status, StatusCode::OK);
    let id = registered["id"].as_str().unwrap();

    let (status, body) = app.get(&format!("/api/usuarios/{}", id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["nome"], "Ivo");
    assert_eq!(body["email"], "ivo@x.com");
    assert_eq!(body["perfil"], "Sofisticado I");
    assert_eq!(body["nivel"], 2);
}

// =============================================================================
// Lookups
// =============================================================================

#[tokio::test]
async fn unknown_user_is_not_found() {
    let app = TestApp::new();

    let (status, body) = app
        .get("/api/usuarios/00000000-0000-0000-0000-000000000000")
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn profile_details_require_a_catalog_row() {
    let app = TestApp::new();

    let (status, _) = app.get("/api/perfil/Minimal").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    app.submit(json!({"nome": "Hugo", "email": "hugo@x.com"}))
        .await;

    let (status, body) = app.get("/api/perfil/Minimal").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "nome": "Minimal",
            "descricao": "Descrição do perfil Minimal",
            "caracteristicas": ["Característica 1", "Característica 2", "Característica 3"]
        })
    );
}

#[tokio::test]
async fn seeded_catalog_is_listed_in_level_order() {
    let app = TestApp::seeded().await;

    let (status, body) = app.get("/api/perfis").await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["nome"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "Minimal",
            "Sofisticado I",
            "Sofisticado II",
            "Sofisticado III",
            "Investidor Antifrágil"
        ]
    );
}

#[tokio::test]
async fn liveness_endpoint_reports_ok() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "Backend conectado com sucesso!");
    assert!(body["timestamp"].as_i64().unwrap() > 0);
}
