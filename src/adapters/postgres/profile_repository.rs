//! PostgreSQL implementation of ProfileRepository.
//!
//! Name uniqueness is enforced by the `profiles_name_key` constraint; a
//! violation is reported as `ErrorCode::ProfileExists` so the catalog can
//! re-fetch the winning row.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, ProfileId, Timestamp};
use crate::domain::profile::Profile;
use crate::ports::ProfileRepository;

const PROFILE_NAME_CONSTRAINT: &str = "profiles_name_key";

/// PostgreSQL implementation of the ProfileRepository port.
#[derive(Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    /// Creates a new PostgresProfileRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a profile.
#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    id: Uuid,
    name: String,
    level: i32,
    created_at: DateTime<Utc>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile::reconstitute(
            ProfileId::from_uuid(row.id),
            row.name,
            row.level,
            Timestamp::from_datetime(row.created_at),
        )
    }
}

fn is_name_conflict(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.constraint() == Some(PROFILE_NAME_CONSTRAINT),
        _ => false,
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Profile>, DomainError> {
        let row: Option<ProfileRow> = sqlx::query_as(
            r#"
            SELECT id, name, level, created_at
            FROM profiles
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find profile: {}", e)))?;

        Ok(row.map(Profile::from))
    }

    async fn save(&self, profile: &Profile) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO profiles (id, name, level, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(profile.id().as_uuid())
        .bind(profile.name())
        .bind(profile.level())
        .bind(profile.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_name_conflict(&e) {
                return DomainError::new(
                    ErrorCode::ProfileExists,
                    format!("Profile already exists: {}", profile.name()),
                );
            }
            DomainError::database(format!("Failed to save profile: {}", e))
        })?;

        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM profiles")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to count profiles: {}", e)))?;

        Ok(count.max(0) as u64)
    }

    async fn find_all(&self) -> Result<Vec<Profile>, DomainError> {
        let rows: Vec<ProfileRow> = sqlx::query_as(
            r#"
            SELECT id, name, level, created_at
            FROM profiles
            ORDER BY level, name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list profiles: {}", e)))?;

        Ok(rows.into_iter().map(Profile::from).collect())
    }
}
