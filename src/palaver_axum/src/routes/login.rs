use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::Response,
};
use palaver_adapters::{
    auth_validation::SessionAuthConfig,
    handlers::{self, CredentialsForm},
};
use palaver_core::{PasswordHasher, UserStore};

use super::malformed_body;
use crate::adapters::response_builder;

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, H>(
    State((user_store, hasher, config)): State<(U, H, SessionAuthConfig)>,
    form: Result<Form<CredentialsForm>, FormRejection>,
) -> Response
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => return malformed_body(rejection),
    };

    handlers::handle_login(&user_store, &hasher, &config, form, response_builder()).await
}
