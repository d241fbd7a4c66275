//! Framework-agnostic register handler.

use palaver_application::RegisterUseCase;
use palaver_core::{AuthResponseBuilder, AuthResponseHelpers, PasswordHasher, UserStore};

use super::{credentials::CredentialsForm, error::HandlerError};

/// Validates and stores a new account. Never opens a session.
///
/// Responds `201` on success, `406` for a short username or password,
/// `409` for a taken username and `500` with a generic body otherwise.
pub async fn handle_register<U, H, B>(
    user_store: &U,
    hasher: &H,
    form: CredentialsForm,
    builder: B,
) -> B::Response
where
    U: UserStore,
    H: PasswordHasher,
    B: AuthResponseBuilder,
{
    match RegisterUseCase::new(user_store, hasher)
        .execute(form.username, form.password)
        .await
    {
        Ok(user_id) => builder.created_json(serde_json::json!({
            "message": "User registered successfully",
            "user_id": user_id,
        })),
        Err(e) => HandlerError::from(e).into_response(builder),
    }
}
