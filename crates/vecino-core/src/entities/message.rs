//! Chat message entity
//!
//! Messages are immutable once created. The author's name and avatar are
//! snapshotted at write time so history reads need no join; a later rename
//! does not rewrite old messages.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Avatar glyph snapshotted onto messages
pub const MESSAGE_AVATAR: &str = "👤";

/// A message posted to a chat room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub room_id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_avatar: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a new message attributed to the given author
    pub fn new(id: Uuid, room_id: Uuid, user_id: Uuid, user_name: String, message: String) -> Self {
        Self {
            id,
            room_id,
            user_id,
            user_name,
            user_avatar: MESSAGE_AVATAR.to_string(),
            message,
            created_at: Utc::now(),
        }
    }
}
