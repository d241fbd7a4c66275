//! Message board routes. All of them sit behind `require_session`.

use axum::{
    Extension, Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    response::Response,
};
use palaver_adapters::handlers::{self, MessageBody, PageQuery};
use palaver_core::{AuthenticatedSession, MessageStore};

use super::malformed_body;
use crate::adapters::response_builder;

#[tracing::instrument(name = "List messages", skip_all)]
pub async fn list_messages<M>(
    State(message_store): State<M>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Response
where
    M: MessageStore + Clone + 'static,
{
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return malformed_body(rejection),
    };

    handlers::handle_list_messages(&message_store, query, response_builder()).await
}

#[tracing::instrument(name = "Post message", skip_all, fields(author = %session.identity.username))]
pub async fn post_message<M>(
    State(message_store): State<M>,
    Extension(session): Extension<AuthenticatedSession>,
    body: Result<Json<MessageBody>, JsonRejection>,
) -> Response
where
    M: MessageStore + Clone + 'static,
{
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return malformed_body(rejection),
    };

    handlers::handle_post_message(
        &message_store,
        &session.identity,
        body,
        response_builder(),
    )
    .await
}

#[tracing::instrument(name = "Edit message", skip(message_store, session, body), fields(author = %session.identity.username))]
pub async fn edit_message<M>(
    State(message_store): State<M>,
    Extension(session): Extension<AuthenticatedSession>,
    Path(id): Path<String>,
    body: Result<Json<MessageBody>, JsonRejection>,
) -> Response
where
    M: MessageStore + Clone + 'static,
{
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return malformed_body(rejection),
    };

    handlers::handle_edit_message(
        &message_store,
        &session.identity,
        &id,
        body,
        response_builder(),
    )
    .await
}

#[tracing::instrument(name = "Delete message", skip(message_store, session), fields(author = %session.identity.username))]
pub async fn delete_message<M>(
    State(message_store): State<M>,
    Extension(session): Extension<AuthenticatedSession>,
    Path(id): Path<String>,
) -> Response
where
    M: MessageStore + Clone + 'static,
{
    handlers::handle_delete_message(&message_store, &session.identity, &id, response_builder())
        .await
}
