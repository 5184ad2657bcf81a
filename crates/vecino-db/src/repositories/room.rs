//! PostgreSQL implementation of RoomRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use vecino_core::entities::ChatRoom;
use vecino_core::traits::{RepoResult, RoomRepository};

use crate::models::RoomModel;

use super::error::map_db_error;

/// PostgreSQL implementation of RoomRepository
#[derive(Clone)]
pub struct PgRoomRepository {
    pool: PgPool,
}

impl PgRoomRepository {
    /// Create a new PgRoomRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomRepository for PgRoomRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<ChatRoom>> {
        let rows = sqlx::query_as::<_, RoomModel>(
            r"
            SELECT id, name, avatar, created_at
            FROM chat_rooms
            ORDER BY created_at ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ChatRoom::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, room: &ChatRoom) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO chat_rooms (id, name, avatar, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(room.id)
        .bind(&room.name)
        .bind(&room.avatar)
        .bind(room.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM chat_rooms
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}
