use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use palaver_core::{
    Message, MessageId, MessagePage, MessageStore, MessageStoreError, MessageText, Pagination,
    UserId,
};

#[derive(Default, Clone)]
pub struct HashMapMessageStore {
    messages: Arc<RwLock<HashMap<MessageId, Message>>>,
}

impl HashMapMessageStore {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl MessageStore for HashMapMessageStore {
    async fn add_message(&self, message: Message) -> Result<(), MessageStoreError> {
        self.messages.write().await.insert(message.id, message);
        Ok(())
    }

    async fn get_page(&self, pagination: Pagination) -> Result<MessagePage, MessageStoreError> {
        let messages = self.messages.read().await;
        let mut newest_first: Vec<&Message> = messages.values().collect();
        newest_first.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let offset = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);
        Ok(MessagePage {
            total_count: messages.len() as u64,
            messages: newest_first
                .into_iter()
                .skip(offset)
                .take(pagination.limit() as usize)
                .cloned()
                .collect(),
        })
    }

    async fn update_text(
        &self,
        id: &MessageId,
        author: &UserId,
        text: MessageText,
    ) -> Result<Message, MessageStoreError> {
        let mut messages = self.messages.write().await;
        match messages.get_mut(id) {
            Some(message) if message.author == *author => {
                message.text = text;
                Ok(message.clone())
            }
            _ => Err(MessageStoreError::MessageNotFound),
        }
    }

    async fn delete_message(
        &self,
        id: &MessageId,
        author: &UserId,
    ) -> Result<(), MessageStoreError> {
        let mut messages = self.messages.write().await;
        match messages.get(id) {
            Some(message) if message.author == *author => {
                messages.remove(id);
                Ok(())
            }
            _ => Err(MessageStoreError::MessageNotFound),
        }
    }
}
