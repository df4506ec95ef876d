//! HTTP adapter for profile catalog endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ProfileDetailsResponse, ProfileSummaryResponse};
pub use routes::profile_routes;
