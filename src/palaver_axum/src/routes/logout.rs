use axum::{Extension, extract::State, response::Response};
use palaver_adapters::{auth_validation::SessionAuthConfig, handlers};
use palaver_core::{AuthenticatedSession, UserStore};

use crate::adapters::response_builder;

/// Expects `require_session` in front of it.
#[tracing::instrument(name = "Logout", skip_all, fields(username = %session.identity.username))]
pub async fn logout<U>(
    State((user_store, config)): State<(U, SessionAuthConfig)>,
    Extension(session): Extension<AuthenticatedSession>,
) -> Response
where
    U: UserStore + Clone + 'static,
{
    handlers::handle_logout(&user_store, &config, &session, response_builder()).await
}
