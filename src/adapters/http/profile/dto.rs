//! HTTP DTOs for profile endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::profile::{Profile, ProfileDetails};

/// Description of a named profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDetailsResponse {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "caracteristicas")]
    pub traits: Vec<String>,
}

impl From<ProfileDetails> for ProfileDetailsResponse {
    fn from(details: ProfileDetails) -> Self {
        Self {
            name: details.name,
            description: details.description,
            traits: details.traits.to_vec(),
        }
    }
}

/// A catalog row as listed by `GET /api/perfis`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSummaryResponse {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "nivel")]
    pub level: i32,
}

impl From<&Profile> for ProfileSummaryResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id().to_string(),
            name: profile.name().to_string(),
            level: profile.level(),
        }
    }
}
