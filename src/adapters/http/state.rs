//! Shared application state for HTTP handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::application::handlers::profile::{GetProfileDetailsHandler, ProfileCatalog};
use crate::application::handlers::registration::{GetUserHandler, RegisterUserHandler};
use crate::ports::{ProfileRepository, UserRepository};

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped dependencies
/// for efficient sharing across handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ProfileCatalog>,
    pub user_repository: Arc<dyn UserRepository>,
    /// Upper bound on processing a questionnaire submission.
    pub registration_timeout: Duration,
}

const DEFAULT_REGISTRATION_TIMEOUT: Duration = Duration::from_secs(30);

impl AppState {
    pub fn new(
        profile_repository: Arc<dyn ProfileRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            catalog: Arc::new(ProfileCatalog::new(profile_repository)),
            user_repository,
            registration_timeout: DEFAULT_REGISTRATION_TIMEOUT,
        }
    }

    pub fn with_registration_timeout(mut self, timeout: Duration) -> Self {
        self.registration_timeout = timeout;
        self
    }

    /// Create handlers on demand from the shared state.
    pub fn register_user_handler(&self) -> RegisterUserHandler {
        RegisterUserHandler::new(self.catalog.clone(), self.user_repository.clone())
    }

    pub fn get_user_handler(&self) -> GetUserHandler {
        GetUserHandler::new(self.user_repository.clone())
    }

    pub fn profile_details_handler(&self) -> GetProfileDetailsHandler {
        GetProfileDetailsHandler::new(self.catalog.clone())
    }
}
