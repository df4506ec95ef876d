//! HTTP adapter for questionnaire registration endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    RegisterRequest, RegistrationErrorResponse, RegistrationResponse, UserResponse,
    REGISTRATION_FAILED_MESSAGE,
};
pub use routes::registration_routes;
