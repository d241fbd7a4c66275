use axum::response::{IntoResponse, Response};
use palaver_adapters::handlers::HandlerError;

use crate::adapters::response_builder;

/// Axum-side wrapper so extractor rejections and middleware failures render
/// with the same `{"error": ...}` body as the handlers.
#[derive(Debug)]
pub struct ApiError(pub HandlerError);

impl From<HandlerError> for ApiError {
    fn from(error: HandlerError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.0.into_response(response_builder())
    }
}

impl ApiError {
    pub fn bad_request(message: &str) -> Self {
        Self(HandlerError::BadRequest(message.to_string()))
    }
}
