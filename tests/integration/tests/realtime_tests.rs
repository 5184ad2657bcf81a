//! Realtime channel integration tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test realtime_tests

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use integration_tests::{assert_json, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use tokio::net::TcpStream;
use tokio_tungstenite::{
    connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream,
};

type WsClient = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Connect a realtime client to the server
async fn connect(server: &TestServer) -> WsClient {
    let (socket, _) = connect_async(server.ws_url())
        .await
        .expect("Failed to connect to /ws");
    socket
}

/// Send a client event as a JSON text frame
async fn send_event(socket: &mut WsClient, event: serde_json::Value) {
    socket
        .send(Message::Text(event.to_string()))
        .await
        .expect("Failed to send event");
}

/// Wait for the next JSON text frame, with a timeout
async fn next_event(socket: &mut WsClient) -> serde_json::Value {
    let frame = tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            match socket.next().await {
                Some(Ok(Message::Text(text))) => return text,
                Some(Ok(_)) => continue,
                other => panic!("connection ended unexpectedly: {other:?}"),
            }
        }
    })
    .await
    .expect("timed out waiting for event");

    serde_json::from_str(&frame).expect("event frame was not JSON")
}

/// Assert no frame arrives within a short grace period
async fn expect_silence(socket: &mut WsClient) {
    let result = tokio::time::timeout(Duration::from_millis(500), socket.next()).await;
    assert!(result.is_err(), "expected no event, got {result:?}");
}

/// Register a user and create a fresh room
async fn register_and_create_room(server: &TestServer) -> (AuthResponse, RoomResponse) {
    let request = RegisterRequest::unique();
    let response = server.post("/api/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth("/api/chat/rooms", &auth.token, &CreateRoomRequest::unique())
        .await
        .unwrap();
    let room: RoomResponse = assert_json(response, StatusCode::OK).await.unwrap();

    (auth, room)
}

#[tokio::test]
async fn test_realtime_send_reaches_other_subscriber() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (sender_auth, room) = register_and_create_room(&server).await;

    let mut sender = connect(&server).await;
    let mut receiver = connect(&server).await;

    send_event(&mut sender, serde_json::json!({"type": "join_room", "room_id": room.id})).await;
    send_event(&mut receiver, serde_json::json!({"type": "join_room", "room_id": room.id})).await;
    // Give the hub a beat to process the joins
    tokio::time::sleep(Duration::from_millis(100)).await;

    send_event(
        &mut sender,
        serde_json::json!({
            "type": "send_message",
            "room_id": room.id,
            "message": "hello",
            "token": sender_auth.token,
        }),
    )
    .await;

    // The other subscriber observes the broadcast
    let event = next_event(&mut receiver).await;
    assert_eq!(event["type"], "new_message");
    assert_eq!(event["message"], "hello");
    assert_eq!(event["user_id"], sender_auth.user.id);

    // The sender's own connection receives the echo too
    let echo = next_event(&mut sender).await;
    assert_eq!(echo["type"], "new_message");
    assert_eq!(echo["message"], "hello");

    // And the message landed in REST history, at the tail
    let response = server
        .get_auth(
            &format!("/api/chat/rooms/{}/messages", room.id),
            &sender_auth.token,
        )
        .await
        .unwrap();
    let messages: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let last = messages.last().expect("history should not be empty");
    assert_eq!(last.message, "hello");
    assert_eq!(last.user_id, sender_auth.user.id);
}

#[tokio::test]
async fn test_rest_post_reaches_realtime_subscriber() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, room) = register_and_create_room(&server).await;

    let mut subscriber = connect(&server).await;
    send_event(
        &mut subscriber,
        serde_json::json!({"type": "join_room", "room_id": room.id}),
    )
    .await;
    tokio::time::sleep(Duration::from_millis(100)).await;

    // Post through the REST façade
    let response = server
        .post_auth(
            &format!("/api/chat/rooms/{}/messages", room.id),
            &auth.token,
            &PostMessageRequest {
                message: "desde rest".to_string(),
            },
        )
        .await
        .unwrap();
    let posted: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();

    // The WebSocket subscriber sees the same row
    let event = next_event(&mut subscriber).await;
    assert_eq!(event["type"], "new_message");
    assert_eq!(event["id"], posted.id);
    assert_eq!(event["message"], "desde rest");
    assert_eq!(event["user_id"], auth.user.id);
}

#[tokio::test]
async fn test_bad_token_send_is_rejected_to_sender_only() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, room) = register_and_create_room(&server).await;

    let mut sender = connect(&server).await;
    let mut bystander = connect(&server).await;

    send_event(&mut sender, serde_json::json!({"type": "join_room", "room_id": room.id})).await;
    send_event(&mut bystander, serde_json::json!({"type": "join_room", "room_id": room.id})).await;
    tokio::time::sleep(Duration::from_millis(100)).await;

    send_event(
        &mut sender,
        serde_json::json!({
            "type": "send_message",
            "room_id": room.id,
            "message": "no deberia llegar",
            "token": "not.a.token",
        }),
    )
    .await;

    // Only the originating connection hears about the failure
    let event = next_event(&mut sender).await;
    assert_eq!(event["type"], "message_rejected");
    assert!(event["reason"].as_str().unwrap().contains("token"));

    expect_silence(&mut bystander).await;
}

#[tokio::test]
async fn test_leave_room_stops_delivery() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, room) = register_and_create_room(&server).await;

    let mut subscriber = connect(&server).await;
    send_event(
        &mut subscriber,
        serde_json::json!({"type": "join_room", "room_id": room.id}),
    )
    .await;
    send_event(
        &mut subscriber,
        serde_json::json!({"type": "leave_room", "room_id": room.id}),
    )
    .await;
    tokio::time::sleep(Duration::from_millis(100)).await;

    server
        .post_auth(
            &format!("/api/chat/rooms/{}/messages", room.id),
            &auth.token,
            &PostMessageRequest {
                message: "a nadie".to_string(),
            },
        )
        .await
        .unwrap();

    expect_silence(&mut subscriber).await;
}
