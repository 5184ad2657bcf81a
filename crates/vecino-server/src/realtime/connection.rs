//! Individual WebSocket connection
//!
//! Represents a single realtime connection and its subscription set.

use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use uuid::Uuid;

use super::protocol::ServerEvent;

/// A single realtime connection
///
/// Identity is never resolved at connect time; sends carry their own token,
/// so the connection only tracks its session id and joined rooms.
pub struct ClientConnection {
    /// Unique session ID
    session_id: String,

    /// Channel to send events to the WebSocket writer task
    sender: mpsc::Sender<ServerEvent>,

    /// Rooms this connection is subscribed to
    rooms: RwLock<HashSet<Uuid>>,
}

impl ClientConnection {
    /// Create a new connection
    pub fn new(session_id: String, sender: mpsc::Sender<ServerEvent>) -> Arc<Self> {
        Arc::new(Self {
            session_id,
            sender,
            rooms: RwLock::new(HashSet::new()),
        })
    }

    /// Get the session ID
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Add a room subscription
    pub async fn join_room(&self, room_id: Uuid) {
        self.rooms.write().await.insert(room_id);
    }

    /// Remove a room subscription
    pub async fn leave_room(&self, room_id: Uuid) {
        self.rooms.write().await.remove(&room_id);
    }

    /// Get all subscribed rooms
    pub async fn rooms(&self) -> Vec<Uuid> {
        self.rooms.read().await.iter().copied().collect()
    }

    /// Check if subscribed to a room
    pub async fn is_in_room(&self, room_id: Uuid) -> bool {
        self.rooms.read().await.contains(&room_id)
    }

    /// Send an event to this connection
    pub async fn send(
        &self,
        event: ServerEvent,
    ) -> Result<(), mpsc::error::SendError<ServerEvent>> {
        self.sender.send(event).await
    }

    /// Check if the sender channel is closed
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl std::fmt::Debug for ClientConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConnection")
            .field("session_id", &self.session_id)
            .finish()
    }
}
