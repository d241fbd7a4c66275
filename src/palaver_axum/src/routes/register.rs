use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::Response,
};
use palaver_adapters::handlers::{self, CredentialsForm};
use palaver_core::{PasswordHasher, UserStore};

use super::malformed_body;
use crate::adapters::response_builder;

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<U, H>(
    State((user_store, hasher)): State<(U, H)>,
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

    handlers::handle_register(&user_store, &hasher, form, response_builder()).await
}
