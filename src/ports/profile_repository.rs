//! ProfileRepository port for catalog persistence operations

use async_trait::async_trait;

use crate::domain::{
    foundation::DomainError,
    profile::Profile,
};

/// Repository for catalog profiles.
///
/// Implementations must enforce name uniqueness: `save` for a name that is
/// already stored fails with `ErrorCode::ProfileExists` and leaves the
/// existing row untouched.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find a profile by its exact name
    async fn find_by_name(&self, name: &str) -> Result<Option<Profile>, DomainError>;

    /// Persist a new profile
    async fn save(&self, profile: &Profile) -> Result<(), DomainError>;

    /// Number of stored profiles
    async fn count(&self) -> Result<u64, DomainError>;

    /// All stored profiles, ordered by level then name
    async fn find_all(&self) -> Result<Vec<Profile>, DomainError>;
}
