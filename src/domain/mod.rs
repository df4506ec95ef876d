//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `profile` - Investor tiers, catalog profiles and profile details
//! - `user` - Registered users bound to a profile

pub mod foundation;
pub mod profile;
pub mod user;
