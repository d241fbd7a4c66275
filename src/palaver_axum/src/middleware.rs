//! Session gate for protected routes.

use axum::{
    extract::{Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};
use palaver_adapters::handlers::HandlerError;
use palaver_core::AuthValidator;

use crate::error::ApiError;

/// Runs the validator on the request parts. On success the principal is
/// inserted into the request extensions, where routes pick it up with
/// `Extension<V::Principal>`; on failure the request stops here with `401`.
///
/// Routes act on the principal rather than re-reading credentials, so they
/// always see the session the validator matched.
///
/// ```ignore
/// let protected = Router::new()
///     .route("/messages", post(post_message::<M>))
///     .with_state(message_store)
///     .route_layer(axum::middleware::from_fn_with_state(
///         validator,
///         require_session::<SessionValidator<U>>,
///     ));
/// ```
pub async fn require_session<V>(
    State(validator): State<V>,
    request: Request,
    next: Next,
) -> Response
where
    V: AuthValidator<RequestParts = Parts>,
    HandlerError: From<V::Error>,
{
    let (mut parts, body) = request.into_parts();

    match validator.validate(&parts).await {
        Ok(principal) => {
            parts.extensions.insert(principal);
            next.run(Request::from_parts(parts, body)).await
        }
        Err(e) => ApiError(HandlerError::from(e)).into_response(),
    }
}
