//! ProfileCatalog - Level to profile resolution and catalog seeding.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::profile::{Profile, ProfileDetails, ProfileTier};
use crate::ports::ProfileRepository;

/// Result of a seeding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The catalog already held at least one profile.
    Skipped,
    /// The catalog was empty; `inserted` tiers were written by this call.
    Seeded { inserted: usize },
}

/// Owns the level → profile mapping and guarantees a catalog row exists for
/// every level ever resolved.
pub struct ProfileCatalog {
    repository: Arc<dyn ProfileRepository>,
}

impl ProfileCatalog {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    /// Resolves a level to its catalog profile, creating the row on first use.
    ///
    /// An existing row is returned unchanged even if its stored level differs
    /// from `level`. A new row is created with `level` as given, not the
    /// tier's canonical level.
    ///
    /// If another writer creates the same name between the lookup and the
    /// insert, the storage layer rejects this insert and the winner's row is
    /// returned instead.
    pub async fn resolve(&self, level: i32) -> Result<Profile, DomainError> {
        let tier = ProfileTier::from_level(level);
        let name = tier.display_name();

        if let Some(existing) = self.repository.find_by_name(name).await? {
            return Ok(existing);
        }

        let candidate = Profile::new(name, level)?;
        match self.repository.save(&candidate).await {
            Ok(()) => {
                debug!(profile = name, level, "Created catalog profile");
                Ok(candidate)
            }
            Err(e) if e.is_profile_conflict() => {
                debug!(profile = name, "Profile created concurrently, re-fetching");
                self.repository.find_by_name(name).await?.ok_or_else(|| {
                    DomainError::new(
                        ErrorCode::InternalError,
                        format!("Profile '{}' reported as existing but not found", name),
                    )
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Inserts the five canonical tiers if the catalog is empty.
    ///
    /// Any existing row skips seeding entirely. Inserts that collide with a
    /// concurrent seeder are ignored.
    pub async fn seed_defaults(&self) -> Result<SeedOutcome, DomainError> {
        let existing = self.repository.count().await?;
        if existing > 0 {
            info!(existing, "Profile catalog already populated, skipping seed");
            return Ok(SeedOutcome::Skipped);
        }

        let mut inserted = 0;
        for tier in ProfileTier::all() {
            match self.repository.save(&Profile::for_tier(*tier)).await {
                Ok(()) => inserted += 1,
                Err(e) if e.is_profile_conflict() => {
                    debug!(profile = tier.display_name(), "Tier already seeded");
                }
                Err(e) => return Err(e),
            }
        }

        info!(inserted, "Seeded profile catalog");
        Ok(SeedOutcome::Seeded { inserted })
    }

    /// Descriptive metadata for any name. Never touches storage.
    pub fn describe(&self, name: &str) -> ProfileDetails {
        ProfileDetails::for_name(name)
    }

    /// Looks up a stored profile by exact name.
    pub async fn find(&self, name: &str) -> Result<Option<Profile>, DomainError> {
        self.repository.find_by_name(name).await
    }

    /// All stored profiles in level order.
    pub async fn profiles(&self) -> Result<Vec<Profile>, DomainError> {
        self.repository.find_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProfileRepository;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn catalog() -> (ProfileCatalog, Arc<InMemoryProfileRepository>) {
        let repo = Arc::new(InMemoryProfileRepository::new());
        (ProfileCatalog::new(repo.clone()), repo)
    }

    /// Simulates another writer inserting the same name right after our lookup.
    struct RacingProfileRepository {
        inner: InMemoryProfileRepository,
        raced: AtomicBool,
    }

    #[async_trait]
    impl ProfileRepository for RacingProfileRepository {
        async fn find_by_name(&self, name: &str) -> Result<Option<Profile>, DomainError> {
            let found = self.inner.find_by_name(name).await?;
            if found.is_none() && !self.raced.swap(true, Ordering::SeqCst) {
                self.inner.save(&Profile::new(name, 99).unwrap()).await?;
            }
            Ok(found)
        }

        async fn save(&self, profile: &Profile) -> Result<(), DomainError> {
            self.inner.save(profile).await
        }

        async fn count(&self) -> Result<u64, DomainError> {
            self.inner.count().await
        }

        async fn find_all(&self) -> Result<Vec<Profile>, DomainError> {
            self.inner.find_all().await
        }
    }

    struct FailingProfileRepository;

    #[async_trait]
    impl ProfileRepository for FailingProfileRepository {
        async fn find_by_name(&self, _name: &str) -> Result<Option<Profile>, DomainError> {
            Ok(None)
        }

        async fn save(&self, _profile: &Profile) -> Result<(), DomainError> {
            Err(DomainError::database("connection refused"))
        }

        async fn count(&self) -> Result<u64, DomainError> {
            Ok(0)
        }

        async fn find_all(&self) -> Result<Vec<Profile>, DomainError> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn resolve_maps_canonical_levels() {
        let (catalog, _) = catalog();

        assert_eq!(catalog.resolve(2).await.unwrap().name(), "Sofisticado I");
        assert_eq!(catalog.resolve(3).await.unwrap().name(), "Sofisticado II");
        assert_eq!(catalog.resolve(4).await.unwrap().name(), "Sofisticado III");
        assert_eq!(catalog.resolve(5).await.unwrap().name(), "Investidor Antifrágil");
    }

    #[tokio::test]
    async fn resolve_falls_back_to_minimal() {
        let (catalog, repo) = catalog();

        for level in [0, -3, 1, 6, 1000] {
            assert_eq!(catalog.resolve(level).await.unwrap().name(), "Minimal");
        }
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn resolve_creates_with_input_level() {
        let (catalog, _) = catalog();

        let profile = catalog.resolve(-3).await.unwrap();

        assert_eq!(profile.name(), "Minimal");
        assert_eq!(profile.level(), -3);
    }

    #[tokio::test]
    async fn resolve_returns_existing_row_unchanged() {
        let (catalog, repo) = catalog();
        let first = catalog.resolve(7).await.unwrap();

        let second = catalog.resolve(1).await.unwrap();

        assert_eq!(first.id(), second.id());
        assert_eq!(second.level(), 7);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn resolve_uses_seeded_row() {
        let (catalog, repo) = catalog();
        catalog.seed_defaults().await.unwrap();
        let seeded = repo.find_by_name("Sofisticado II").await.unwrap().unwrap();

        let resolved = catalog.resolve(3).await.unwrap();

        assert_eq!(resolved.id(), seeded.id());
        assert_eq!(repo.count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn resolve_recovers_from_lost_insert_race() {
        let repo = Arc::new(RacingProfileRepository {
            inner: InMemoryProfileRepository::new(),
            raced: AtomicBool::new(false),
        });
        let catalog = ProfileCatalog::new(repo.clone());

        let profile = catalog.resolve(4).await.unwrap();

        assert_eq!(profile.name(), "Sofisticado III");
        assert_eq!(profile.level(), 99);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_resolves_share_one_row() {
        let (catalog, repo) = catalog();
        let catalog = Arc::new(catalog);

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let catalog = catalog.clone();
                tokio::spawn(async move { catalog.resolve(5).await })
            })
            .collect();

        let mut ids = Vec::new();
        for task in tasks {
            ids.push(task.await.unwrap().unwrap().id());
        }

        ids.dedup();
        assert_eq!(ids.len(), 1);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn resolve_propagates_storage_failure() {
        let catalog = ProfileCatalog::new(Arc::new(FailingProfileRepository));

        let err = catalog.resolve(2).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }

    #[tokio::test]
    async fn seed_inserts_five_tiers_in_order() {
        let (catalog, repo) = catalog();

        let outcome = catalog.seed_defaults().await.unwrap();

        assert_eq!(outcome, SeedOutcome::Seeded { inserted: 5 });
        let seeded: Vec<(String, i32)> = repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|p| (p.name().to_string(), p.level()))
            .collect();
        assert_eq!(
            seeded,
            vec![
                ("Minimal".to_string(), 1),
                ("Sofisticado I".to_string(), 2),
                ("Sofisticado II".to_string(), 3),
                ("Sofisticado III".to_string(), 4),
                ("Investidor Antifrágil".to_string(), 5),
            ]
        );
    }

    #[tokio::test]
    async fn seed_twice_leaves_five_rows() {
        let (catalog, repo) = catalog();

        catalog.seed_defaults().await.unwrap();
        let second = catalog.seed_defaults().await.unwrap();

        assert_eq!(second, SeedOutcome::Skipped);
        assert_eq!(repo.count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn seed_skips_when_any_profile_exists() {
        let (catalog, repo) = catalog();
        catalog.resolve(5).await.unwrap();

        let outcome = catalog.seed_defaults().await.unwrap();

        assert_eq!(outcome, SeedOutcome::Skipped);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn seed_propagates_storage_failure() {
        let catalog = ProfileCatalog::new(Arc::new(FailingProfileRepository));

        assert!(catalog.seed_defaults().await.is_err());
    }

    #[test]
    fn describe_never_fails() {
        let catalog = ProfileCatalog::new(Arc::new(FailingProfileRepository));

        let details = catalog.describe("AnythingAtAll");

        assert_eq!(details.traits.len(), 3);
        assert!(details.description.contains("AnythingAtAll"));
    }
}
