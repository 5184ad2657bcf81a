//! Event and attendance service
//!
//! Tracks the per-event attendee roster and the denormalized attendance
//! counter. Registration takes three steps: load the event, insert the
//! roster row (duplicates rejected by the store's unique key), then a
//! conditional counter increment that enforces capacity in a single
//! statement. The capacity check lives in the database rather than a
//! process-local lock, so it stays correct when several backend instances
//! share the store.

use tracing::{info, instrument, warn};
use uuid::Uuid;
use vecino_core::entities::{CommunityEvent, EventAttendee};
use vecino_core::DomainError;

use crate::dto::{AttendResponse, CreateEventRequest, EventAttendeeResponse, EventResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Event and attendance service
pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    /// Create a new EventService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List active events, optionally filtered by category
    #[instrument(skip(self))]
    pub async fn list_events(&self, category: Option<&str>) -> ServiceResult<Vec<EventResponse>> {
        let events = self.ctx.event_repo().list(category).await?;
        Ok(events.iter().map(EventResponse::from).collect())
    }

    /// Get a single event
    #[instrument(skip(self))]
    pub async fn get_event(&self, event_id: Uuid) -> ServiceResult<EventResponse> {
        let event = self
            .ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or(DomainError::EventNotFound(event_id))?;

        Ok(EventResponse::from(&event))
    }

    /// List the attendee roster for an event
    #[instrument(skip(self))]
    pub async fn list_attendees(
        &self,
        event_id: Uuid,
    ) -> ServiceResult<Vec<EventAttendeeResponse>> {
        let attendees = self.ctx.attendee_repo().find_by_event(event_id).await?;
        Ok(attendees.iter().map(EventAttendeeResponse::from).collect())
    }

    /// Create a new event organized by the given user
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_event(
        &self,
        organizer_id: Uuid,
        organizer_name: &str,
        request: CreateEventRequest,
    ) -> ServiceResult<EventResponse> {
        let event = CommunityEvent {
            id: Uuid::new_v4(),
            title: request.title,
            description: request.description,
            date: request.date,
            location: request.location,
            category: request.category,
            organizer_id,
            organizer_name: organizer_name.to_string(),
            max_attendees: request.max_attendees,
            current_attendees: 0,
            image_url: request.image_url,
            is_active: true,
            created_at: chrono::Utc::now(),
        };

        self.ctx.event_repo().create(&event).await?;

        info!(event_id = %event.id, "Event created");

        Ok(EventResponse::from(&event))
    }

    /// Register a user as attending an event
    #[instrument(skip(self, user_name, user_email), fields(event_id = %event_id, user_id = %user_id))]
    pub async fn attend(
        &self,
        event_id: Uuid,
        user_id: Uuid,
        user_name: &str,
        user_email: &str,
    ) -> ServiceResult<AttendResponse> {
        let event = self
            .ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or(DomainError::EventNotFound(event_id))?;

        // Fast-path rejection; the conditional increment below remains the
        // authority under concurrency
        if event.is_full() {
            return Err(ServiceError::Domain(DomainError::EventFull));
        }

        let attendee = EventAttendee::new(
            event_id,
            user_id,
            user_name.to_string(),
            user_email.to_string(),
        );
        self.ctx.attendee_repo().create(&attendee).await?;

        // The increment only lands while seats remain; losing the race means
        // the roster row must be taken back out
        let seated = self.ctx.event_repo().try_increment_attendees(event_id).await?;
        if !seated {
            warn!(event_id = %event_id, "Event filled up concurrently, rolling back registration");
            self.ctx.attendee_repo().delete(event_id, user_id).await?;
            return Err(ServiceError::Domain(DomainError::EventFull));
        }

        info!(event_id = %event_id, user_id = %user_id, "Attendance registered");

        Ok(AttendResponse::new("Te has registrado en el evento"))
    }

    /// Cancel a user's attendance
    #[instrument(skip(self), fields(event_id = %event_id, user_id = %user_id))]
    pub async fn unattend(&self, event_id: Uuid, user_id: Uuid) -> ServiceResult<AttendResponse> {
        let removed = self.ctx.attendee_repo().delete(event_id, user_id).await?;
        if !removed {
            return Err(ServiceError::Domain(DomainError::AttendeeNotFound));
        }

        self.ctx.event_repo().decrement_attendees(event_id).await?;

        info!(event_id = %event_id, user_id = %user_id, "Attendance cancelled");

        Ok(AttendResponse::new("Te has retirado del evento"))
    }
}
