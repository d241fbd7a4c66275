//! Axum implementation of the framework-neutral response builder.
//!
//! `AuthResponseBuilder` lives in `palaver_core`, so it is implemented here on
//! a wrapper around axum's own response builder.

use axum::{
    body::Body,
    http::{Response, StatusCode},
};
use palaver_core::AuthResponseBuilder;

/// Collects status, headers and a JSON body, then builds an axum response.
pub struct AxumResponseBuilder {
    builder: axum::http::response::Builder,
    body: Option<String>,
}

impl AxumResponseBuilder {
    pub fn new() -> Self {
        Self {
            builder: Response::builder(),
            body: None,
        }
    }
}

impl Default for AxumResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthResponseBuilder for AxumResponseBuilder {
    type Response = Response<Body>;

    fn status(mut self, code: u16) -> Self {
        self.builder = self.builder.status(code);
        self
    }

    fn header(mut self, name: &str, value: &str) -> Self {
        self.builder = self.builder.header(name, value);
        self
    }

    fn json_body(mut self, body: serde_json::Value) -> Self {
        self.builder = self.builder.header("content-type", "application/json");
        self.body = Some(body.to_string());
        self
    }

    /// An invalid status or header value collapses into a bare `500`.
    fn build(self) -> Self::Response {
        let body = self.body.unwrap_or_default();
        match self.builder.body(Body::from(body)) {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "failed to build response");
                let mut response = Response::new(Body::empty());
                *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
                response
            }
        }
    }
}

pub fn response_builder() -> AxumResponseBuilder {
    AxumResponseBuilder::new()
}
