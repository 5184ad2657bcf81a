//! PostgreSQL implementation of AttendeeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use vecino_core::entities::EventAttendee;
use vecino_core::error::DomainError;
use vecino_core::traits::{AttendeeRepository, RepoResult};

use crate::models::AttendeeModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of AttendeeRepository
#[derive(Clone)]
pub struct PgAttendeeRepository {
    pool: PgPool,
}

impl PgAttendeeRepository {
    /// Create a new PgAttendeeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendeeRepository for PgAttendeeRepository {
    #[instrument(skip(self))]
    async fn find_by_event(&self, event_id: Uuid) -> RepoResult<Vec<EventAttendee>> {
        let rows = sqlx::query_as::<_, AttendeeModel>(
            r"
            SELECT event_id, user_id, user_name, user_email, created_at
            FROM event_attendees
            WHERE event_id = $1
            ORDER BY created_at ASC
            ",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(EventAttendee::from).collect())
    }

    #[instrument(skip(self, attendee))]
    async fn create(&self, attendee: &EventAttendee) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO event_attendees (event_id, user_id, user_name, user_email, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(attendee.event_id)
        .bind(attendee.user_id)
        .bind(&attendee.user_name)
        .bind(&attendee.user_email)
        .bind(attendee.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyRegistered))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, event_id: Uuid, user_id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM event_attendees
            WHERE event_id = $1 AND user_id = $2
            ",
        )
        .bind(event_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
