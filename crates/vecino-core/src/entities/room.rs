//! Chat room entity - a named public channel

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Default avatar glyph assigned to rooms created without one
pub const DEFAULT_ROOM_AVATAR: &str = "💬";

/// A public chat room grouping messages and realtime subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRoom {
    pub id: Uuid,
    pub name: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

impl ChatRoom {
    /// Create a new room; a missing avatar falls back to the default glyph
    pub fn new(id: Uuid, name: String, avatar: Option<String>) -> Self {
        Self {
            id,
            name,
            avatar: avatar.unwrap_or_else(|| DEFAULT_ROOM_AVATAR.to_string()),
            created_at: Utc::now(),
        }
    }
}
