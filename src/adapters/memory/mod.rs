//! In-memory adapters - Repository implementations without a database.
//!
//! Backing store for unit and HTTP tests.

mod profile_repository;
mod user_repository;

pub use profile_repository::InMemoryProfileRepository;
pub use user_repository::InMemoryUserRepository;
