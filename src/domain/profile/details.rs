//! Descriptive metadata for a profile name.

use serde::{Deserialize, Serialize};

/// Placeholder traits shown for every profile until real copy exists.
const PLACEHOLDER_TRAITS: [&str; 3] = ["Característica 1", "Característica 2", "Característica 3"];

/// Description and traits for a profile, keyed by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDetails {
    pub name: String,
    pub description: String,
    pub traits: [String; 3],
}

impl ProfileDetails {
    /// Builds details for any name. Does not check that the name is in the catalog.
    pub fn for_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: format!("Descrição do perfil {}", name),
            traits: PLACEHOLDER_TRAITS.map(String::from),
        }
    }
}
