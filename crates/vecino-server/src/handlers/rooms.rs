//! Chat room and message handlers
//!
//! The REST façade for chat: room listing/creation and message
//! history/posting. A message posted here is also handed to the realtime
//! hub, so WebSocket subscribers of the room receive it without polling.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;
use vecino_service::{
    ChatService, CreateMessageRequest, CreateRoomRequest, MessageResponse, RoomResponse,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::realtime::ServerEvent;
use crate::response::ApiResult;
use crate::state::AppState;

/// List all chat rooms in creation order
///
/// GET /api/chat/rooms
pub async fn list_rooms(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<RoomResponse>>> {
    let service = ChatService::new(state.service_context());
    let rooms = service.list_rooms().await?;
    Ok(Json(rooms))
}

/// Create a new chat room
///
/// POST /api/chat/rooms
pub async fn create_room(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateRoomRequest>,
) -> ApiResult<Json<RoomResponse>> {
    let service = ChatService::new(state.service_context());
    let room = service.create_room(request).await?;
    Ok(Json(room))
}

/// Query parameters for message history
#[derive(Debug, Deserialize)]
pub struct MessagesQuery {
    /// History window size; oldest `limit` messages, ascending. The value is
    /// caller-controlled with no cap, preserved from the legacy contract.
    pub limit: Option<i64>,
}

/// Get message history for a room
///
/// GET /api/chat/rooms/:room_id/messages?limit=
pub async fn get_messages(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(room_id): Path<Uuid>,
    Query(query): Query<MessagesQuery>,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let service = ChatService::new(state.service_context());
    let messages = service.get_messages(room_id, query.limit).await?;
    Ok(Json(messages))
}

/// Post a message to a room
///
/// POST /api/chat/rooms/:room_id/messages
pub async fn post_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(room_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<CreateMessageRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = ChatService::new(state.service_context());
    let message = service
        .create_message(room_id, auth.user_id, &auth.name, request)
        .await?;

    // Push the persisted row to realtime subscribers of the room
    state
        .hub()
        .broadcast_to_room(room_id, ServerEvent::NewMessage(message.clone()))
        .await;

    Ok(Json(message))
}
