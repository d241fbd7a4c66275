//! Framework-agnostic login handler.

use palaver_application::LoginUseCase;
use palaver_core::{AuthResponseBuilder, PasswordHasher, UserStore};

use super::{credentials::CredentialsForm, error::HandlerError};
use crate::auth_validation::{SessionAuthConfig, create_csrf_cookie, create_session_cookie};

/// Opens a session and delivers its token pair as two cookies.
///
/// Unknown usernames and wrong passwords both get the same `401` body.
pub async fn handle_login<U, H, B>(
    user_store: &U,
    hasher: &H,
    config: &SessionAuthConfig,
    form: CredentialsForm,
    builder: B,
) -> B::Response
where
    U: UserStore,
    H: PasswordHasher,
    B: AuthResponseBuilder,
{
    let use_case = LoginUseCase::new(user_store, hasher, config.session_ttl());

    match use_case.execute(form.username, form.password).await {
        Ok(issued) => builder
            .status(200)
            .cookie(&create_session_cookie(
                &issued.session_token,
                issued.expires_at,
                config,
            ))
            .cookie(&create_csrf_cookie(
                &issued.csrf_token,
                issued.expires_at,
                config,
            ))
            .json_body(serde_json::json!({ "message": "Login successful" }))
            .build(),
        Err(e) => HandlerError::from(e).into_response(builder),
    }
}
