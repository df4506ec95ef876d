//! RegisterUser - Command handler turning a questionnaire submission into a user.

use std::sync::Arc;

use tracing::debug;

use crate::application::handlers::profile::ProfileCatalog;
use crate::domain::foundation::DomainError;
use crate::domain::user::User;
use crate::ports::UserRepository;

/// Level used when a submission carries none.
pub const DEFAULT_LEVEL: i32 = 1;

/// Command carrying a questionnaire submission.
///
/// Name and email are not validated; any level is accepted.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub name: String,
    pub email: String,
    pub level: Option<i32>,
}

impl RegisterUserCommand {
    /// The level actually used for resolution.
    pub fn effective_level(&self) -> i32 {
        self.level.unwrap_or(DEFAULT_LEVEL)
    }
}

/// Result of a successful registration.
#[derive(Debug, Clone)]
pub struct RegisterUserResult {
    pub user: User,
}

/// Handler for registering users.
///
/// Profile resolution and the user insert are separate storage operations:
/// a profile created during a registration that later fails stays in the
/// catalog and is reused by the next registration for that tier.
pub struct RegisterUserHandler {
    catalog: Arc<ProfileCatalog>,
    users: Arc<dyn UserRepository>,
}

impl RegisterUserHandler {
    pub fn new(catalog: Arc<ProfileCatalog>, users: Arc<dyn UserRepository>) -> Self {
        Self { catalog, users }
    }

    pub async fn handle(&self, cmd: RegisterUserCommand) -> Result<RegisterUserResult, DomainError> {
        let level = cmd.effective_level();

        // 1. Resolve (or lazily create) the catalog profile
        let profile = self.catalog.resolve(level).await?;

        // 2. Bind and persist the user
        let user = User::new(cmd.name, cmd.email, profile);
        self.users.save(&user).await?;

        debug!(
            user_id = %user.id(),
            profile = user.profile().name(),
            level,
            "Registered user"
        );

        Ok(RegisterUserResult { user })
    }
}
