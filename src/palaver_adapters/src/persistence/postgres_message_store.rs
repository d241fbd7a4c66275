use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use palaver_core::{
    Message, MessageId, MessagePage, MessageStore, MessageStoreError, MessageText, Pagination,
    UserId,
};

#[derive(Clone)]
pub struct PostgresMessageStore {
    pool: PgPool,
}

impl PostgresMessageStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresMessageStore { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MessageRow {
    id: Uuid,
    author: Uuid,
    text: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<MessageRow> for Message {
    type Error = MessageStoreError;

    fn try_from(row: MessageRow) -> Result<Self, Self::Error> {
        Ok(Message {
            id: MessageId::from(row.id),
            author: UserId::from(row.author),
            text: MessageText::parse(row.text)
                .map_err(|e| MessageStoreError::UnexpectedError(e.to_string()))?,
            created_at: row.created_at,
        })
    }
}

fn unexpected(e: sqlx::Error) -> MessageStoreError {
    MessageStoreError::UnexpectedError(e.to_string())
}

#[async_trait::async_trait]
impl MessageStore for PostgresMessageStore {
    #[tracing::instrument(name = "Adding message to PostgreSQL", skip_all)]
    async fn add_message(&self, message: Message) -> Result<(), MessageStoreError> {
        sqlx::query(
            r#"
                INSERT INTO messages (id, author, text, created_at)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(message.id.as_uuid())
        .bind(message.author.as_uuid())
        .bind(message.text.as_str())
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;

        Ok(())
    }

    #[tracing::instrument(name = "Reading message page from PostgreSQL", skip_all)]
    async fn get_page(&self, pagination: Pagination) -> Result<MessagePage, MessageStoreError> {
        let offset = i64::try_from(pagination.offset())
            .map_err(|e| MessageStoreError::UnexpectedError(e.to_string()))?;

        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
                SELECT id, author, text, created_at
                FROM messages
                ORDER BY created_at DESC
                LIMIT $1 OFFSET $2
            "#,
        )
        .bind(i64::from(pagination.limit()))
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;

        let total_count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM messages")
            .fetch_one(&self.pool)
            .await
            .map_err(unexpected)?;

        Ok(MessagePage {
            messages: rows
                .into_iter()
                .map(Message::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            total_count: u64::try_from(total_count).unwrap_or_default(),
        })
    }

    #[tracing::instrument(name = "Updating message in PostgreSQL", skip_all)]
    async fn update_text(
        &self,
        id: &MessageId,
        author: &UserId,
        text: MessageText,
    ) -> Result<Message, MessageStoreError> {
        let row = sqlx::query_as::<_, MessageRow>(
            r#"
                UPDATE messages
                SET text = $3
                WHERE id = $1 AND author = $2
                RETURNING id, author, text, created_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(author.as_uuid())
        .bind(text.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?;

        row.ok_or(MessageStoreError::MessageNotFound)?.try_into()
    }

    #[tracing::instrument(name = "Deleting message from PostgreSQL", skip_all)]
    async fn delete_message(
        &self,
        id: &MessageId,
        author: &UserId,
    ) -> Result<(), MessageStoreError> {
        let result = sqlx::query("DELETE FROM messages WHERE id = $1 AND author = $2")
            .bind(id.as_uuid())
            .bind(author.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;

        if result.rows_affected() == 0 {
            return Err(MessageStoreError::MessageNotFound);
        }
        Ok(())
    }
}
