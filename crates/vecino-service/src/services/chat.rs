//! Chat service
//!
//! Handles room listing/creation and message history/posting. Message
//! broadcasting to realtime subscribers is the caller's concern: both the
//! REST façade and the realtime hub persist through this service, then hand
//! the created message to the hub for fan-out.

use tracing::{info, instrument};
use uuid::Uuid;
use vecino_core::entities::{ChatMessage, ChatRoom};

use crate::dto::{CreateMessageRequest, CreateRoomRequest, MessageResponse, RoomResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Default history window when the caller does not pass a limit
pub const DEFAULT_MESSAGE_LIMIT: i64 = 50;

/// Chat service
pub struct ChatService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChatService<'a> {
    /// Create a new ChatService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all rooms in creation order
    #[instrument(skip(self))]
    pub async fn list_rooms(&self) -> ServiceResult<Vec<RoomResponse>> {
        let rooms = self.ctx.room_repo().list().await?;
        Ok(rooms.iter().map(RoomResponse::from).collect())
    }

    /// Create a new room
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_room(&self, request: CreateRoomRequest) -> ServiceResult<RoomResponse> {
        let room = ChatRoom::new(Uuid::new_v4(), request.name, request.avatar);

        self.ctx.room_repo().create(&room).await?;

        info!(room_id = %room.id, "Room created");

        Ok(RoomResponse::from(&room))
    }

    /// Get message history for a room
    ///
    /// Returns the oldest `limit` messages in ascending creation order. The
    /// limit is caller-controlled and intentionally uncapped, matching the
    /// public contract.
    #[instrument(skip(self))]
    pub async fn get_messages(
        &self,
        room_id: Uuid,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<MessageResponse>> {
        let limit = limit.unwrap_or(DEFAULT_MESSAGE_LIMIT);
        let messages = self.ctx.message_repo().find_by_room(room_id, limit).await?;
        Ok(messages.iter().map(MessageResponse::from).collect())
    }

    /// Persist a message attributed to the given author
    ///
    /// The author's name is snapshotted onto the row; the returned response
    /// is what the hub broadcasts to room subscribers.
    #[instrument(skip(self, request), fields(room_id = %room_id, user_id = %user_id))]
    pub async fn create_message(
        &self,
        room_id: Uuid,
        user_id: Uuid,
        user_name: &str,
        request: CreateMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        let message = ChatMessage::new(
            Uuid::new_v4(),
            room_id,
            user_id,
            user_name.to_string(),
            request.message,
        );

        self.ctx.message_repo().create(&message).await?;

        info!(message_id = %message.id, "Message created");

        Ok(MessageResponse::from(&message))
    }
}
