//! Framework-agnostic message board handlers.

use palaver_application::MessageBoardUseCase;
use palaver_core::{AuthResponseBuilder, AuthResponseHelpers, Identity, MessageStore};
use serde::{Deserialize, Serialize};

use super::error::HandlerError;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub text: String,
}

fn parse_number(raw: Option<&str>, missing: &str, invalid: &str) -> Result<u32, HandlerError> {
    raw.ok_or_else(|| HandlerError::BadRequest(missing.to_string()))?
        .trim()
        .parse()
        .map_err(|_| HandlerError::BadRequest(invalid.to_string()))
}

fn to_json<T: Serialize>(value: &T) -> Result<serde_json::Value, HandlerError> {
    serde_json::to_value(value).map_err(|e| {
        tracing::error!(error = %e, "failed to serialize response");
        HandlerError::Internal
    })
}

pub async fn handle_list_messages<M, B>(message_store: &M, query: PageQuery, builder: B) -> B::Response
where
    M: MessageStore,
    B: AuthResponseBuilder,
{
    let result = async {
        let page = parse_number(
            query.page.as_deref(),
            "No page number provided",
            "Invalid page number",
        )?;
        let limit = parse_number(
            query.limit.as_deref(),
            "No limit number provided",
            "Invalid limit number",
        )?;
        let page = MessageBoardUseCase::new(message_store).list(page, limit).await?;
        to_json(&page)
    }
    .await;

    match result {
        Ok(body) => builder.ok_json(body),
        Err(e) => e.into_response(builder),
    }
}

pub async fn handle_post_message<M, B>(
    message_store: &M,
    identity: &Identity,
    body: MessageBody,
    builder: B,
) -> B::Response
where
    M: MessageStore,
    B: AuthResponseBuilder,
{
    let result = match MessageBoardUseCase::new(message_store)
        .post(identity, body.text)
        .await
    {
        Ok(message) => to_json(&message),
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(body) => builder.created_json(body),
        Err(e) => e.into_response(builder),
    }
}

pub async fn handle_edit_message<M, B>(
    message_store: &M,
    identity: &Identity,
    raw_id: &str,
    body: MessageBody,
    builder: B,
) -> B::Response
where
    M: MessageStore,
    B: AuthResponseBuilder,
{
    let result = match MessageBoardUseCase::new(message_store)
        .edit(identity, raw_id, body.text)
        .await
    {
        Ok(message) => to_json(&message),
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(body) => builder.ok_json(body),
        Err(e) => e.into_response(builder),
    }
}

pub async fn handle_delete_message<M, B>(
    message_store: &M,
    identity: &Identity,
    raw_id: &str,
    builder: B,
) -> B::Response
where
    M: MessageStore,
    B: AuthResponseBuilder,
{
    match MessageBoardUseCase::new(message_store)
        .delete(identity, raw_id)
        .await
    {
        Ok(()) => builder.ok_json(serde_json::json!({ "message": "Message deleted successfully" })),
        Err(e) => HandlerError::from(e).into_response(builder),
    }
}
