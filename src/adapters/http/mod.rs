//! HTTP adapter exposing the questionnaire API.

pub mod error;
pub mod health;
pub mod profile;
pub mod registration;
pub mod router;
pub mod state;

pub use router::api_router;
pub use state::AppState;
