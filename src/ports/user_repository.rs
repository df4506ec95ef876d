//! UserRepository port for registered users

use async_trait::async_trait;

use crate::domain::{
    foundation::{DomainError, UserId},
    user::User,
};

/// Repository for registered users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user. The referenced profile must already be stored.
    async fn save(&self, user: &User) -> Result<(), DomainError>;

    /// Find a user by ID, with its profile loaded
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;
}
