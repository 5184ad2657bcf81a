//! Realtime channel protocol
//!
//! JSON text frames, discriminated by a `type` field.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vecino_service::MessageResponse;

/// Events a client may send to the server
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Subscribe this connection to a room. Idempotent; unknown room ids are
    /// tolerated (rooms are public, a bogus id simply never receives anything).
    JoinRoom { room_id: Uuid },

    /// Unsubscribe from a room. Idempotent, safe for rooms never joined.
    LeaveRoom { room_id: Uuid },

    /// Persist and broadcast a message. The token travels in the event
    /// because the connection itself is unauthenticated.
    SendMessage {
        room_id: Uuid,
        message: String,
        token: String,
    },
}

/// Events the server pushes to clients
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    /// A message was persisted; broadcast to every subscriber of its room,
    /// including the sender's own connection (clients de-duplicate by
    /// matching user id).
    NewMessage(MessageResponse),

    /// A send from this connection was refused. Delivered only to the
    /// originating connection; the server also logs the failure.
    MessageRejected { reason: String },
}

impl ServerEvent {
    /// Serialize to a JSON text frame
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
