use axum::{
    extract::{Path, State},
    response::Response,
};
use palaver_adapters::handlers;
use palaver_core::UserStore;

use crate::adapters::response_builder;

#[tracing::instrument(name = "Get profile", skip(user_store))]
pub async fn get_profile<U>(State(user_store): State<U>, Path(id): Path<String>) -> Response
where
    U: UserStore + Clone + 'static,
{
    handlers::handle_get_profile(&user_store, &id, response_builder()).await
}
