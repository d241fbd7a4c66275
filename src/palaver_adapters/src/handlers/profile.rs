//! Framework-agnostic public profile handler.

use palaver_application::GetProfileUseCase;
use palaver_core::{AuthResponseBuilder, AuthResponseHelpers, UserStore};

use super::error::HandlerError;

pub async fn handle_get_profile<U, B>(user_store: &U, raw_id: &str, builder: B) -> B::Response
where
    U: UserStore,
    B: AuthResponseBuilder,
{
    match GetProfileUseCase::new(user_store).execute(raw_id).await {
        Ok(profile) => match serde_json::to_value(profile) {
            Ok(body) => builder.ok_json(body),
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize profile");
                HandlerError::Internal.into_response(builder)
            }
        },
        Err(e) => HandlerError::from(e).into_response(builder),
    }
}
