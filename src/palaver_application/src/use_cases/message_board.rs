use palaver_core::{
    Identity, Message, MessageError, MessageId, MessagePage, MessageStore, MessageStoreError,
    MessageText, Pagination,
};

#[derive(Debug, thiserror::Error)]
pub enum MessageBoardError {
    #[error("{0}")]
    InvalidInput(#[from] MessageError),
    #[error("Message not found")]
    MessageNotFound,
    #[error("Message store error: {0}")]
    MessageStoreError(MessageStoreError),
}

impl From<MessageStoreError> for MessageBoardError {
    fn from(error: MessageStoreError) -> Self {
        match error {
            MessageStoreError::MessageNotFound => Self::MessageNotFound,
            other => Self::MessageStoreError(other),
        }
    }
}

/// Message board use case - listing, posting and author-only edits
pub struct MessageBoardUseCase<'a, M>
where
    M: MessageStore,
{
    message_store: &'a M,
}

impl<'a, M> MessageBoardUseCase<'a, M>
where
    M: MessageStore,
{
    pub fn new(message_store: &'a M) -> Self {
        Self { message_store }
    }

    #[tracing::instrument(name = "MessageBoardUseCase::list", skip(self))]
    pub async fn list(&self, page: u32, limit: u32) -> Result<MessagePage, MessageBoardError> {
        let pagination = Pagination::new(page, limit)?;
        Ok(self.message_store.get_page(pagination).await?)
    }

    #[tracing::instrument(name = "MessageBoardUseCase::post", skip(self, text), fields(user_id = %author.user_id))]
    pub async fn post(&self, author: &Identity, text: String) -> Result<Message, MessageBoardError> {
        let message = Message::new(author.user_id, MessageText::parse(text)?);
        self.message_store.add_message(message.clone()).await?;
        Ok(message)
    }

    #[tracing::instrument(name = "MessageBoardUseCase::edit", skip(self, text), fields(user_id = %author.user_id))]
    pub async fn edit(
        &self,
        author: &Identity,
        raw_id: &str,
        text: String,
    ) -> Result<Message, MessageBoardError> {
        let id = MessageId::parse(raw_id)?;
        let text = MessageText::parse(text)?;
        Ok(self
            .message_store
            .update_text(&id, &author.user_id, text)
            .await?)
    }

    #[tracing::instrument(name = "MessageBoardUseCase::delete", skip(self), fields(user_id = %author.user_id))]
    pub async fn delete(&self, author: &Identity, raw_id: &str) -> Result<(), MessageBoardError> {
        let id = MessageId::parse(raw_id)?;
        Ok(self
            .message_store
            .delete_message(&id, &author.user_id)
            .await?)
    }
}
