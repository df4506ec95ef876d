//! Investor profile tier definitions.
//!
//! The five tiers form a closed table keyed by questionnaire level. Any level
//! outside 2..=5 falls back to [`ProfileTier::Minimal`].

use serde::{Deserialize, Serialize};

/// Investor profile tier.
///
/// The tier is the stable key for a catalog entry; its display name is what
/// gets stored and matched in the profile catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileTier {
    /// Level 1, and the fallback for every unmapped level.
    Minimal,
    SofisticadoI,
    SofisticadoII,
    SofisticadoIII,
    /// Level 5 - highest tier.
    InvestidorAntifragil,
}

impl ProfileTier {
    /// Maps a questionnaire level to its tier.
    ///
    /// Levels other than 2, 3, 4 and 5 (zero, negatives, 1, 6 and above)
    /// map to `Minimal`. This is a fallback, not a validation failure.
    pub fn from_level(level: i32) -> Self {
        match level {
            5 => ProfileTier::InvestidorAntifragil,
            4 => ProfileTier::SofisticadoIII,
            3 => ProfileTier::SofisticadoII,
            2 => ProfileTier::SofisticadoI,
            _ => ProfileTier::Minimal,
        }
    }

    /// Returns the canonical display name stored in the catalog.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProfileTier::Minimal => "Minimal",
            ProfileTier::SofisticadoI => "Sofisticado I",
            ProfileTier::SofisticadoII => "Sofisticado II",
            ProfileTier::SofisticadoIII => "Sofisticado III",
            ProfileTier::InvestidorAntifragil => "Investidor Antifrágil",
        }
    }

    /// Returns the canonical level used when seeding the catalog.
    pub fn canonical_level(&self) -> i32 {
        match self {
            ProfileTier::Minimal => 1,
            ProfileTier::SofisticadoI => 2,
            ProfileTier::SofisticadoII => 3,
            ProfileTier::SofisticadoIII => 4,
            ProfileTier::InvestidorAntifragil => 5,
        }
    }

    /// All tiers in level order.
    pub fn all() -> &'static [ProfileTier] {
        &[
            ProfileTier::Minimal,
            ProfileTier::SofisticadoI,
            ProfileTier::SofisticadoII,
            ProfileTier::SofisticadoIII,
            ProfileTier::InvestidorAntifragil,
        ]
    }
}

impl std::fmt::Display for ProfileTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
