//! Framework-agnostic logout handler.

use palaver_application::LogoutUseCase;
use palaver_core::{AuthResponseBuilder, AuthResponseHelpers, AuthenticatedSession, UserStore};

use super::error::HandlerError;
use crate::auth_validation::{SessionAuthConfig, create_removal_cookie};

/// Ends the session the middleware validated and clears both cookies.
///
/// Only `session.session_token` is removed; other sessions of the same user
/// stay live. The cookies are cleared even when the store write fails.
pub async fn handle_logout<U, B>(
    user_store: &U,
    config: &SessionAuthConfig,
    session: &AuthenticatedSession,
    builder: B,
) -> B::Response
where
    U: UserStore,
    B: AuthResponseBuilder,
{
    let builder = builder
        .cookie(&create_removal_cookie(
            &config.session_cookie_name,
            true,
            config.cookie_secure,
        ))
        .cookie(&create_removal_cookie(
            &config.csrf_cookie_name,
            false,
            config.cookie_secure,
        ));

    match LogoutUseCase::new(user_store)
        .execute(&session.identity.username, &session.session_token)
        .await
    {
        Ok(()) => builder.ok_json(serde_json::json!({ "message": "Logged out successfully" })),
        Err(e) => HandlerError::from(e).into_response(builder),
    }
}
