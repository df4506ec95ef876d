//! Profile application handlers.
//!
//! The profile catalog plus the read-side queries built on it.

mod get_profile_details;
mod profile_catalog;

pub use get_profile_details::{GetProfileDetailsHandler, GetProfileDetailsQuery};
pub use profile_catalog::{ProfileCatalog, SeedOutcome};
