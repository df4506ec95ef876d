//! In-memory ProfileRepository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::profile::Profile;
use crate::ports::ProfileRepository;

/// In-memory profile catalog.
///
/// Name uniqueness is checked under the write lock, so concurrent saves for
/// the same name behave like a UNIQUE constraint: one wins, the rest get
/// `ErrorCode::ProfileExists`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<Vec<Profile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Profile>, DomainError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.iter().find(|p| p.name() == name).cloned())
    }

    async fn save(&self, profile: &Profile) -> Result<(), DomainError> {
        let mut profiles = self.profiles.write().await;
        if profiles.iter().any(|p| p.name() == profile.name()) {
            return Err(DomainError::new(
                ErrorCode::ProfileExists,
                format!("Profile already exists: {}", profile.name()),
            ));
        }
        profiles.push(profile.clone());
        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.profiles.read().await.len() as u64)
    }

    async fn find_all(&self) -> Result<Vec<Profile>, DomainError> {
        let mut profiles = self.profiles.read().await.clone();
        profiles.sort_by(|a, b| a.level().cmp(&b.level()).then_with(|| a.name().cmp(b.name())));
        Ok(profiles)
    }
}
