//! Profile module - Investor tiers and the catalog entity.
//!
//! # Domain Invariants
//!
//! 1. At most one catalog profile per name
//! 2. Profiles are never mutated after creation
//! 3. Levels outside 2..=5 resolve to the "Minimal" tier

mod details;
#[allow(clippy::module_inception)]
mod profile;
mod tier;

pub use details::ProfileDetails;
pub use profile::Profile;
pub use tier::ProfileTier;
