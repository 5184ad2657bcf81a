//! Community event handlers
//!
//! Event browsing is public; creating events and managing attendance
//! require authentication.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;
use vecino_service::{
    AttendResponse, CreateEventRequest, EventAttendeeResponse, EventResponse, EventService,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Query parameters for event listing
#[derive(Debug, Deserialize)]
pub struct EventsQuery {
    pub category: Option<String>,
}

/// List active events ordered by date
///
/// GET /api/events?category=
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<EventsQuery>,
) -> ApiResult<Json<Vec<EventResponse>>> {
    let service = EventService::new(state.service_context());
    let events = service.list_events(query.category.as_deref()).await?;
    Ok(Json(events))
}

/// Get a single event
///
/// GET /api/events/:event_id
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> ApiResult<Json<EventResponse>> {
    let service = EventService::new(state.service_context());
    let event = service.get_event(event_id).await?;
    Ok(Json(event))
}

/// List the attendee roster for an event
///
/// GET /api/events/:event_id/attendees
pub async fn get_attendees(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> ApiResult<Json<Vec<EventAttendeeResponse>>> {
    let service = EventService::new(state.service_context());
    let attendees = service.list_attendees(event_id).await?;
    Ok(Json(attendees))
}

/// Create a new event organized by the caller
///
/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateEventRequest>,
) -> ApiResult<Json<EventResponse>> {
    let service = EventService::new(state.service_context());
    let event = service
        .create_event(auth.user_id, &auth.name, request)
        .await?;
    Ok(Json(event))
}

/// Register the caller as attending an event
///
/// POST /api/events/:event_id/attend
pub async fn attend(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(event_id): Path<Uuid>,
) -> ApiResult<Json<AttendResponse>> {
    let service = EventService::new(state.service_context());
    let response = service
        .attend(event_id, auth.user_id, &auth.name, &auth.email)
        .await?;
    Ok(Json(response))
}

/// Cancel the caller's attendance
///
/// DELETE /api/events/:event_id/attend
pub async fn unattend(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(event_id): Path<Uuid>,
) -> ApiResult<Json<AttendResponse>> {
    let service = EventService::new(state.service_context());
    let response = service.unattend(event_id, auth.user_id).await?;
    Ok(Json(response))
}
