//! Profile entity - a persisted catalog row.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProfileId, Timestamp, ValidationError};

use super::ProfileTier;

/// A named investor tier persisted in the catalog.
///
/// Profiles are created once per distinct name and never mutated. The stored
/// `level` is whatever level first caused the row to be created, which for
/// lazily created rows is not necessarily the tier's canonical level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    id: ProfileId,
    name: String,
    level: i32,
    created_at: Timestamp,
}

impl Profile {
    /// Creates a new profile with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if `name` is blank.
    pub fn new(name: impl Into<String>, level: i32) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id: ProfileId::new(),
            name,
            level,
            created_at: Timestamp::now(),
        })
    }

    /// Creates the canonical row for a tier.
    pub fn for_tier(tier: ProfileTier) -> Self {
        Self {
            id: ProfileId::new(),
            name: tier.display_name().to_string(),
            level: tier.canonical_level(),
            created_at: Timestamp::now(),
        }
    }

    /// Rebuilds a profile from persisted parts.
    pub fn reconstitute(id: ProfileId, name: String, level: i32, created_at: Timestamp) -> Self {
        Self {
            id,
            name,
            level,
            created_at,
        }
    }

    pub fn id(&self) -> ProfileId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}
