//! Realtime hub
//!
//! Owns the connection registry and the room reverse index. Uses `DashMap`
//! for concurrent access; membership lives both on the connection (for
//! cleanup on disconnect) and in the reverse index (for broadcast fan-out).

use dashmap::DashMap;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

use super::connection::ClientConnection;
use super::protocol::ServerEvent;

/// The realtime hub
///
/// State here is ephemeral and non-authoritative: it only describes which
/// live connections are subscribed to which rooms right now.
pub struct RealtimeHub {
    /// Active connections by session ID
    connections: DashMap<String, Arc<ClientConnection>>,

    /// Room ID to session IDs mapping (reverse index for fan-out)
    room_index: DashMap<Uuid, HashSet<String>>,
}

impl RealtimeHub {
    /// Create a new hub
    #[must_use]
    pub fn new() -> Self {
        Self {
            connections: DashMap::new(),
            room_index: DashMap::new(),
        }
    }

    /// Create a new hub wrapped in Arc
    #[must_use]
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Register a new connection
    pub fn add_connection(
        &self,
        session_id: String,
        sender: mpsc::Sender<ServerEvent>,
    ) -> Arc<ClientConnection> {
        let connection = ClientConnection::new(session_id.clone(), sender);
        self.connections
            .insert(session_id.clone(), connection.clone());

        tracing::debug!(session_id = %session_id, "Connection added");

        connection
    }

    /// Remove a connection, dropping all of its subscriptions
    ///
    /// Uses `alter` for atomic modify-and-cleanup to avoid TOCTOU races on
    /// the reverse index.
    pub async fn remove_connection(&self, session_id: &str) {
        if let Some((_, connection)) = self.connections.remove(session_id) {
            for room_id in connection.rooms().await {
                self.room_index.alter(&room_id, |_, mut sessions| {
                    sessions.remove(session_id);
                    sessions
                });
            }

            // Clean up all empty room entries atomically
            self.room_index.retain(|_, sessions| !sessions.is_empty());

            tracing::debug!(session_id = %session_id, "Connection removed");
        }
    }

    /// Get a connection by session ID
    pub fn get_connection(&self, session_id: &str) -> Option<Arc<ClientConnection>> {
        self.connections.get(session_id).map(|r| r.clone())
    }

    /// Subscribe a connection to a room
    ///
    /// Idempotent; no membership check against a room allowlist, since rooms
    /// are public and joining a nonexistent id is harmless.
    pub async fn join_room(&self, session_id: &str, room_id: Uuid) -> bool {
        if let Some(connection) = self.connections.get(session_id) {
            connection.join_room(room_id).await;

            self.room_index
                .entry(room_id)
                .or_default()
                .insert(session_id.to_string());

            tracing::trace!(
                session_id = %session_id,
                room_id = %room_id,
                "Connection joined room"
            );

            true
        } else {
            false
        }
    }

    /// Unsubscribe a connection from a room
    ///
    /// Idempotent, safe to call for a room never joined.
    pub async fn leave_room(&self, session_id: &str, room_id: Uuid) -> bool {
        if let Some(connection) = self.connections.get(session_id) {
            connection.leave_room(room_id).await;

            self.room_index.alter(&room_id, |_, mut sessions| {
                sessions.remove(session_id);
                sessions
            });

            // Clean up empty entry
            self.room_index.retain(|_, sessions| !sessions.is_empty());

            tracing::trace!(
                session_id = %session_id,
                room_id = %room_id,
                "Connection left room"
            );

            true
        } else {
            false
        }
    }

    /// Get all connections subscribed to a room
    pub fn room_connections(&self, room_id: Uuid) -> Vec<Arc<ClientConnection>> {
        self.room_index
            .get(&room_id)
            .map(|sessions| {
                sessions
                    .iter()
                    .filter_map(|sid| self.connections.get(sid).map(|c| c.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Send an event to every connection subscribed to a room
    ///
    /// The sender's own connection is included; clients mark their own
    /// messages by user id rather than relying on echo suppression.
    pub async fn broadcast_to_room(&self, room_id: Uuid, event: ServerEvent) -> usize {
        let connections = self.room_connections(room_id);
        let mut sent = 0;

        for conn in connections {
            if conn.send(event.clone()).await.is_ok() {
                sent += 1;
            }
        }

        tracing::trace!(
            room_id = %room_id,
            sent = sent,
            "Event broadcast to room"
        );

        sent
    }

    /// Send an event to a single connection
    pub async fn send_to(&self, session_id: &str, event: ServerEvent) -> bool {
        match self.get_connection(session_id) {
            Some(conn) => conn.send(event).await.is_ok(),
            None => false,
        }
    }

    /// Get the total number of active connections
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Get the number of rooms with at least one subscriber
    pub fn room_count(&self) -> usize {
        self.room_index.len()
    }

    /// Check if a session exists
    pub fn has_session(&self, session_id: &str) -> bool {
        self.connections.contains_key(session_id)
    }
}

impl Default for RealtimeHub {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RealtimeHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RealtimeHub")
            .field("connections", &self.connections.len())
            .field("rooms", &self.room_index.len())
            .finish()
    }
}
