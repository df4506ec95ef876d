//! User entity - a registered questionnaire submitter.

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::profile::Profile;

/// A user bound to exactly one catalog profile.
///
/// The profile is an immutable snapshot of the shared catalog row; the row
/// itself is owned by the catalog and outlives any user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    profile: Profile,
    registered_at: Timestamp,
}

impl User {
    /// Creates a new user. Name and email are accepted as given.
    pub fn new(name: impl Into<String>, email: impl Into<String>, profile: Profile) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            email: email.into(),
            profile,
            registered_at: Timestamp::now(),
        }
    }

    /// Rebuilds a user from persisted parts.
    pub fn reconstitute(
        id: UserId,
        name: String,
        email: String,
        profile: Profile,
        registered_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            email,
            profile,
            registered_at,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn registered_at(&self) -> &Timestamp {
        &self.registered_at
    }
}
