//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.email, request.email);
    assert_eq!(auth.user.name, request.name);
    assert!(!auth.token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/api/auth/register", &request).await.unwrap();

    // Second registration with same email fails with a plain bad request
    let response = server.post("/api/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_register_missing_fields() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            "/api/auth/register",
            &serde_json::json!({"email": "incompleta@example.com"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register first
    let register_req = RegisterRequest::unique();
    server
        .post("/api/auth/register", &register_req)
        .await
        .unwrap();

    // Login
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.email, register_req.email);
    assert!(!auth.token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nadie@example.com".to_string(),
        password: "cualquier-cosa".to_string(),
    };

    let response = server.post("/api/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Chat Room Tests
// ============================================================================

/// Register a fresh user and return the session token
async fn register(server: &TestServer) -> AuthResponse {
    let request = RegisterRequest::unique();
    let response = server.post("/api/auth/register", &request).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

#[tokio::test]
async fn test_rooms_require_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/chat/rooms").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_rooms_reject_garbage_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get_auth("/api/chat/rooms", "not.a.token")
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_create_and_list_rooms() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let request = CreateRoomRequest::unique();
    let response = server
        .post_auth("/api/chat/rooms", &auth.token, &request)
        .await
        .unwrap();
    let room: RoomResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(room.name, request.name);
    assert_eq!(room.avatar, "💬");

    // The new room appears in the listing
    let response = server.get_auth("/api/chat/rooms", &auth.token).await.unwrap();
    let rooms: Vec<RoomResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(rooms.iter().any(|r| r.id == room.id));
}

#[tokio::test]
async fn test_create_room_blank_name() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let response = server
        .post_auth(
            "/api/chat/rooms",
            &auth.token,
            &serde_json::json!({"name": ""}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_post_and_fetch_messages() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    // Create a room
    let response = server
        .post_auth("/api/chat/rooms", &auth.token, &CreateRoomRequest::unique())
        .await
        .unwrap();
    let room: RoomResponse = assert_json(response, StatusCode::OK).await.unwrap();

    // Post a few messages
    for i in 0..3 {
        let response = server
            .post_auth(
                &format!("/api/chat/rooms/{}/messages", room.id),
                &auth.token,
                &PostMessageRequest {
                    message: format!("mensaje {i}"),
                },
            )
            .await
            .unwrap();
        let message: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(message.user_id, auth.user.id);
        assert_eq!(message.user_name, auth.user.name);
    }

    // History comes back ascending
    let response = server
        .get_auth(
            &format!("/api/chat/rooms/{}/messages", room.id),
            &auth.token,
        )
        .await
        .unwrap();
    let messages: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].message, "mensaje 0");
    assert_eq!(messages[2].message, "mensaje 2");
}

#[tokio::test]
async fn test_message_limit_returns_oldest_window() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let response = server
        .post_auth("/api/chat/rooms", &auth.token, &CreateRoomRequest::unique())
        .await
        .unwrap();
    let room: RoomResponse = assert_json(response, StatusCode::OK).await.unwrap();

    for i in 0..5 {
        server
            .post_auth(
                &format!("/api/chat/rooms/{}/messages", room.id),
                &auth.token,
                &PostMessageRequest {
                    message: format!("mensaje {i}"),
                },
            )
            .await
            .unwrap();
    }

    // limit=2 yields the two oldest messages in ascending order
    let response = server
        .get_auth(
            &format!("/api/chat/rooms/{}/messages?limit=2", room.id),
            &auth.token,
        )
        .await
        .unwrap();
    let messages: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].message, "mensaje 0");
    assert_eq!(messages[1].message, "mensaje 1");
}

#[tokio::test]
async fn test_post_blank_message() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let response = server
        .post_auth("/api/chat/rooms", &auth.token, &CreateRoomRequest::unique())
        .await
        .unwrap();
    let room: RoomResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/chat/rooms/{}/messages", room.id),
            &auth.token,
            &PostMessageRequest {
                message: String::new(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Event and Attendance Tests
// ============================================================================

/// Create an event and return it
async fn create_event(server: &TestServer, token: &str, max: Option<i32>) -> EventResponse {
    let response = server
        .post_auth("/api/events", token, &CreateEventRequest::unique(max))
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

#[tokio::test]
async fn test_create_and_get_event() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let event = create_event(&server, &auth.token, Some(20)).await;
    assert_eq!(event.organizer_id, auth.user.id);
    assert_eq!(event.organizer_name, auth.user.name);
    assert_eq!(event.current_attendees, 0);
    assert!(event.is_active);

    let response = server.get(&format!("/api/events/{}", event.id)).await.unwrap();
    let fetched: EventResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, event.id);
}

#[tokio::test]
async fn test_events_listing_is_public() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/events").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_attend_and_unattend_round_trip() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let organizer = register(&server).await;
    let attendee = register(&server).await;

    let event = create_event(&server, &organizer.token, None).await;

    // Attend
    let response = server
        .post_auth_empty(&format!("/api/events/{}/attend", event.id), &attendee.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&format!("/api/events/{}", event.id)).await.unwrap();
    let fetched: EventResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.current_attendees, 1);

    // Cancel; the counter returns exactly to its pre-attend value
    let response = server
        .delete_auth(&format!("/api/events/{}/attend", event.id), &attendee.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&format!("/api/events/{}", event.id)).await.unwrap();
    let fetched: EventResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.current_attendees, 0);
}

#[tokio::test]
async fn test_attend_twice_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let organizer = register(&server).await;
    let attendee = register(&server).await;

    let event = create_event(&server, &organizer.token, None).await;

    server
        .post_auth_empty(&format!("/api/events/{}/attend", event.id), &attendee.token)
        .await
        .unwrap();

    let response = server
        .post_auth_empty(&format!("/api/events/{}/attend", event.id), &attendee.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_full_event_rejects_next_attendee() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let organizer = register(&server).await;

    let event = create_event(&server, &organizer.token, Some(2)).await;

    // Two distinct users fill the event
    for _ in 0..2 {
        let user = register(&server).await;
        let response = server
            .post_auth_empty(&format!("/api/events/{}/attend", event.id), &user.token)
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    // The third bounces
    let late = register(&server).await;
    let response = server
        .post_auth_empty(&format!("/api/events/{}/attend", event.id), &late.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Roster shows exactly two attendees
    let response = server
        .get(&format!("/api/events/{}/attendees", event.id))
        .await
        .unwrap();
    let roster: Vec<serde_json::Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(roster.len(), 2);
}

#[tokio::test]
async fn test_unattend_without_registration() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let organizer = register(&server).await;
    let stranger = register(&server).await;

    let event = create_event(&server, &organizer.token, None).await;

    let response = server
        .delete_auth(&format!("/api/events/{}/attend", event.id), &stranger.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_attend_missing_event() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let response = server
        .post_auth_empty(
            &format!("/api/events/{}/attend", uuid::Uuid::new_v4()),
            &auth.token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Service Directory Tests
// ============================================================================

#[tokio::test]
async fn test_services_listing_is_public() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/services").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_create_service_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/services", &CreateListingRequest::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_create_service_starts_unverified() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let request = CreateListingRequest::unique();
    let response = server
        .post_auth("/api/services", &auth.token, &request)
        .await
        .unwrap();
    let listing: ListingResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(listing.name, request.name);
    assert!(!listing.is_verified);
    assert_eq!(listing.review_count, 0);

    // And it is browsable by category without auth
    let response = server
        .get(&format!("/api/services?category={}", request.category))
        .await
        .unwrap();
    let listings: Vec<ListingResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listings.iter().any(|l| l.id == listing.id));
}
