//! GetProfileDetails - Query handler for profile descriptions.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::profile::ProfileDetails;

use super::ProfileCatalog;

/// Query for the details of a named profile.
#[derive(Debug, Clone)]
pub struct GetProfileDetailsQuery {
    pub name: String,
}

/// Handler that checks the name is in the catalog before describing it.
pub struct GetProfileDetailsHandler {
    catalog: Arc<ProfileCatalog>,
}

impl GetProfileDetailsHandler {
    pub fn new(catalog: Arc<ProfileCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: GetProfileDetailsQuery) -> Result<ProfileDetails, DomainError> {
        if self.catalog.find(&query.name).await?.is_none() {
            return Err(DomainError::new(
                ErrorCode::ProfileNotFound,
                format!("Profile not found: {}", query.name),
            ));
        }

        Ok(self.catalog.describe(&query.name))
    }
}
