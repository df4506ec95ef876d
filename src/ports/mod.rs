//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `ProfileRepository` - Catalog profiles, unique by name
//! - `UserRepository` - Registered users bound to a profile

mod profile_repository;
mod user_repository;

pub use profile_repository::ProfileRepository;
pub use user_repository::UserRepository;
