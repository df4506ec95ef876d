//! Registration application handlers.
//!
//! Command and query handlers for questionnaire submissions and the users
//! they create.

mod get_user;
mod register_user;

pub use get_user::{GetUserHandler, GetUserQuery};
pub use register_user::{
    RegisterUserCommand, RegisterUserHandler, RegisterUserResult, DEFAULT_LEVEL,
};
