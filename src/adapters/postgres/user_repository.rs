//! PostgreSQL implementation of UserRepository.
//!
//! Users reference `profiles(id)`; reads join the profile row back in.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ProfileId, Timestamp, UserId};
use crate::domain::profile::Profile;
use crate::domain::user::User;
use crate::ports::UserRepository;

/// PostgreSQL implementation of the UserRepository port.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// A user row joined with its profile.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    email: String,
    registered_at: DateTime<Utc>,
    profile_id: Uuid,
    profile_name: String,
    profile_level: i32,
    profile_created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        let profile = Profile::reconstitute(
            ProfileId::from_uuid(row.profile_id),
            row.profile_name,
            row.profile_level,
            Timestamp::from_datetime(row.profile_created_at),
        );
        User::reconstitute(
            UserId::from_uuid(row.id),
            row.name,
            row.email,
            profile,
            Timestamp::from_datetime(row.registered_at),
        )
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, profile_id, registered_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id().as_uuid())
        .bind(user.name())
        .bind(user.email())
        .bind(user.profile().id().as_uuid())
        .bind(user.registered_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to save user: {}", e)))?;

        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT u.id, u.name, u.email, u.registered_at,
                   p.id AS profile_id, p.name AS profile_name,
                   p.level AS profile_level, p.created_at AS profile_created_at
            FROM users u
            JOIN profiles p ON p.id = u.profile_id
            WHERE u.id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find user: {}", e)))?;

        Ok(row.map(User::from))
    }
}
