//! WebSocket handler
//!
//! Handles realtime connections and event processing. Each connection gets a
//! reader task (client events) and a writer task (hub fan-out); the hub
//! registry entry is dropped when either side ends.

use axum::{
    extract::{ws::Message, State, WebSocketUpgrade},
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;
use vecino_service::{ChatService, CreateMessageRequest};

use super::connection::ClientConnection;
use super::protocol::{ClientEvent, ServerEvent};
use crate::state::AppState;

/// Channel buffer size for outgoing events
const EVENT_BUFFER_SIZE: usize = 100;

/// WebSocket endpoint handler
///
/// GET /ws
pub async fn ws_handler(State(state): State<AppState>, ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(state, socket))
}

/// Handle an upgraded WebSocket connection
async fn handle_socket(state: AppState, socket: axum::extract::ws::WebSocket) {
    let session_id = Uuid::new_v4().to_string();

    // Create event channel for outgoing messages
    let (tx, mut rx) = mpsc::channel::<ServerEvent>(EVENT_BUFFER_SIZE);

    // Register connection
    let connection = state.hub().add_connection(session_id.clone(), tx);

    tracing::info!(session_id = %session_id, "Realtime connection established");

    // Split the WebSocket
    let (mut ws_sink, mut ws_stream) = socket.split();

    // Clone state for the reader task
    let state_recv = state.clone();
    let connection_recv = connection.clone();

    // Task to receive events from the client
    let recv_task = tokio::spawn(async move {
        while let Some(msg) = ws_stream.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    handle_text_frame(&state_recv, &connection_recv, &text).await;
                }
                Ok(Message::Close(_)) => {
                    tracing::info!(
                        session_id = %connection_recv.session_id(),
                        "Client closed connection"
                    );
                    return;
                }
                Ok(Message::Ping(_) | Message::Pong(_)) => {
                    // Pong replies are handled by axum
                }
                Ok(Message::Binary(_)) => {
                    tracing::debug!(
                        session_id = %connection_recv.session_id(),
                        "Binary frames not supported, ignoring"
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        session_id = %connection_recv.session_id(),
                        error = %e,
                        "WebSocket error"
                    );
                    return;
                }
            }
        }
    });

    // Clone for the writer task
    let session_id_send = session_id.clone();

    // Task to push hub events to the client
    let send_task = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            if let Ok(json) = event.to_json() {
                if ws_sink.send(Message::Text(json)).await.is_err() {
                    tracing::warn!(
                        session_id = %session_id_send,
                        "Failed to send event to WebSocket"
                    );
                    break;
                }
            }
        }

        // Close the WebSocket when the channel is closed
        let _ = ws_sink.close().await;
    });

    // Wait for either side to finish
    tokio::select! {
        _ = recv_task => {
            tracing::debug!(session_id = %session_id, "Receive task ended");
        }
        _ = send_task => {
            tracing::debug!(session_id = %session_id, "Send task ended");
        }
    }

    // Disconnect drops all subscriptions; nothing durable is touched
    state.hub().remove_connection(&session_id).await;
    tracing::info!(session_id = %session_id, "Realtime connection closed");
}

/// Parse and dispatch a single text frame from the client
async fn handle_text_frame(state: &AppState, connection: &Arc<ClientConnection>, text: &str) {
    let event = match serde_json::from_str::<ClientEvent>(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::debug!(
                session_id = %connection.session_id(),
                error = %e,
                "Failed to parse client event"
            );
            return;
        }
    };

    match event {
        ClientEvent::JoinRoom { room_id } => {
            state.hub().join_room(connection.session_id(), room_id).await;
        }
        ClientEvent::LeaveRoom { room_id } => {
            state.hub().leave_room(connection.session_id(), room_id).await;
        }
        ClientEvent::SendMessage {
            room_id,
            message,
            token,
        } => {
            handle_send_message(state, connection, room_id, message, token).await;
        }
    }
}

/// Verify, persist, and broadcast a realtime message send
///
/// Failures are logged server-side and answered with a `message_rejected`
/// event to the originating connection only.
async fn handle_send_message(
    state: &AppState,
    connection: &Arc<ClientConnection>,
    room_id: Uuid,
    message: String,
    token: String,
) {
    // The send carries its own token; the connection is never authenticated
    // as a whole
    let claims = match state.jwt_service().verify_token(&token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::warn!(
                session_id = %connection.session_id(),
                error = %e,
                "Realtime send rejected: token verification failed"
            );
            reject(connection, "invalid token").await;
            return;
        }
    };

    let user_id = match claims.user_id() {
        Ok(user_id) => user_id,
        Err(e) => {
            tracing::warn!(
                session_id = %connection.session_id(),
                error = %e,
                "Realtime send rejected: malformed user id in token"
            );
            reject(connection, "invalid token").await;
            return;
        }
    };

    let service = ChatService::new(state.service_context());
    let created = service
        .create_message(
            room_id,
            user_id,
            &claims.name,
            CreateMessageRequest { message },
        )
        .await;

    match created {
        Ok(response) => {
            // Broadcast in persist order to every subscriber, the sender
            // included
            state
                .hub()
                .broadcast_to_room(room_id, ServerEvent::NewMessage(response))
                .await;
        }
        Err(e) => {
            tracing::warn!(
                session_id = %connection.session_id(),
                room_id = %room_id,
                error = %e,
                "Realtime send rejected: message not persisted"
            );
            reject(connection, "message could not be delivered").await;
        }
    }
}

/// Send a rejection event back to the originating connection
async fn reject(connection: &Arc<ClientConnection>, reason: &str) {
    let event = ServerEvent::MessageRejected {
        reason: reason.to_string(),
    };
    if connection.send(event).await.is_err() {
        tracing::debug!(
            session_id = %connection.session_id(),
            "Could not deliver rejection event (connection gone)"
        );
    }
}
