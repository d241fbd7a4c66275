//! Framework-neutral response building.
//!
//! Web framework crates implement `AuthResponseBuilder` on a newtype of their
//! own response builder, so handlers in `palaver_adapters` never name a
//! framework:
//!
//! ```ignore
//! pub struct AxumResponseBuilder { /* axum builder plus a pending body */ }
//!
//! impl palaver_core::AuthResponseBuilder for AxumResponseBuilder {
//!     type Response = axum::response::Response;
//!     // ...
//! }
//! ```

/// Builder for an outgoing HTTP response.
///
/// ```ignore
/// builder
///     .status(200)
///     .cookie("session_token=abc; Path=/; HttpOnly")
///     .json_body(json!({"message": "Login successful"}))
///     .build()
/// ```
pub trait AuthResponseBuilder: Sized {
    type Response;

    fn status(self, code: u16) -> Self;

    /// Appends a header; repeated names produce repeated header lines.
    fn header(self, name: &str, value: &str) -> Self;

    /// Adds a `Set-Cookie` header holding a complete cookie string.
    fn cookie(self, cookie_value: &str) -> Self {
        self.header("set-cookie", cookie_value)
    }

    /// Serializes `body` and sets `Content-Type: application/json`.
    fn json_body(self, body: serde_json::Value) -> Self;

    fn build(self) -> Self::Response;
}

/// Shorthands for the responses the chat API produces.
///
/// Every error body has the shape `{"error": message}`.
pub trait AuthResponseHelpers: AuthResponseBuilder {
    fn ok_json(self, body: serde_json::Value) -> Self::Response {
        self.status(200).json_body(body).build()
    }

    fn created_json(self, body: serde_json::Value) -> Self::Response {
        self.status(201).json_body(body).build()
    }

    fn error_json(self, status: u16, message: &str) -> Self::Response {
        self.status(status)
            .json_body(serde_json::json!({ "error": message }))
            .build()
    }
}

impl<T: AuthResponseBuilder> AuthResponseHelpers for T {}
