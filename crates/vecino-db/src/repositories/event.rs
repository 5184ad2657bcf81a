//! PostgreSQL implementation of EventRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use vecino_core::entities::CommunityEvent;
use vecino_core::traits::{EventRepository, RepoResult};

use crate::models::EventModel;

use super::error::map_db_error;

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    /// Create a new PgEventRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self))]
    async fn list(&self, category: Option<&str>) -> RepoResult<Vec<CommunityEvent>> {
        let rows = match category {
            Some(category) => {
                sqlx::query_as::<_, EventModel>(
                    r"
                    SELECT id, title, description, date, location, category, organizer_id,
                           organizer_name, max_attendees, current_attendees, image_url,
                           is_active, created_at
                    FROM events
                    WHERE is_active AND category = $1
                    ORDER BY date ASC
                    ",
                )
                .bind(category)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, EventModel>(
                    r"
                    SELECT id, title, description, date, location, category, organizer_id,
                           organizer_name, max_attendees, current_attendees, image_url,
                           is_active, created_at
                    FROM events
                    WHERE is_active
                    ORDER BY date ASC
                    ",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(CommunityEvent::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<CommunityEvent>> {
        let result = sqlx::query_as::<_, EventModel>(
            r"
            SELECT id, title, description, date, location, category, organizer_id,
                   organizer_name, max_attendees, current_attendees, image_url,
                   is_active, created_at
            FROM events
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(CommunityEvent::from))
    }

    #[instrument(skip(self, event))]
    async fn create(&self, event: &CommunityEvent) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO events (id, title, description, date, location, category,
                                organizer_id, organizer_name, max_attendees,
                                current_attendees, image_url, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ",
        )
        .bind(event.id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.date)
        .bind(&event.location)
        .bind(&event.category)
        .bind(event.organizer_id)
        .bind(&event.organizer_name)
        .bind(event.max_attendees)
        .bind(event.current_attendees)
        .bind(&event.image_url)
        .bind(event.is_active)
        .bind(event.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn try_increment_attendees(&self, id: Uuid) -> RepoResult<bool> {
        // Capacity check and increment in one statement, so two concurrent
        // registrations cannot both slip past the cap. Zero rows affected
        // means the event is full (or gone).
        let result = sqlx::query(
            r"
            UPDATE events
            SET current_attendees = current_attendees + 1
            WHERE id = $1
              AND (max_attendees IS NULL OR current_attendees < max_attendees)
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn decrement_attendees(&self, id: Uuid) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE events
            SET current_attendees = GREATEST(current_attendees - 1, 0)
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
