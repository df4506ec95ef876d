//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod profile;
pub mod registration;

pub use profile::{GetProfileDetailsHandler, GetProfileDetailsQuery, ProfileCatalog, SeedOutcome};
pub use registration::{
    GetUserHandler, GetUserQuery, RegisterUserCommand, RegisterUserHandler, RegisterUserResult,
};
