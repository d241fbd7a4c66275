//! Axum routes.
//!
//! Each route pulls its inputs out of the request with axum extractors, calls
//! the matching framework-agnostic handler from `palaver_adapters`, and returns
//! the response that handler built.

pub mod health;
pub mod login;
pub mod logout;
pub mod messages;
pub mod profile;
pub mod register;

pub use health::health;
pub use login::login;
pub use logout::logout;
pub use messages::{delete_message, edit_message, list_messages, post_message};
pub use profile::get_profile;
pub use register::register;

use axum::response::{IntoResponse, Response};

use crate::error::ApiError;

pub(crate) fn malformed_body(rejection: impl std::fmt::Display) -> Response {
    tracing::debug!(%rejection, "rejected malformed request");
    ApiError::bad_request("Invalid request body").into_response()
}
