//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use vecino_core::entities::ChatMessage;
use vecino_core::traits::{MessageRepository, RepoResult};

use crate::models::MessageModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self))]
    async fn find_by_room(&self, room_id: Uuid, limit: i64) -> RepoResult<Vec<ChatMessage>> {
        // Ascending order with LIMIT yields the oldest window, matching the
        // documented history contract
        let rows = sqlx::query_as::<_, MessageModel>(
            r"
            SELECT id, room_id, user_id, user_name, user_avatar, message, created_at
            FROM chat_messages
            WHERE room_id = $1
            ORDER BY created_at ASC
            LIMIT $2
            ",
        )
        .bind(room_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ChatMessage::from).collect())
    }

    #[instrument(skip(self, message))]
    async fn create(&self, message: &ChatMessage) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO chat_messages (id, room_id, user_id, user_name, user_avatar, message, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(message.id)
        .bind(message.room_id)
        .bind(message.user_id)
        .bind(&message.user_name)
        .bind(&message.user_avatar)
        .bind(&message.message)
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
