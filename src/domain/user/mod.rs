//! User module - Registered users and their profile binding.
//!
//! # Domain Invariants
//!
//! 1. Every user references exactly one catalog profile
//! 2. Users are immutable once registered

#[allow(clippy::module_inception)]
mod user;

pub use user::User;
