//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        let nonce = uuid::Uuid::new_v4().simple();
        Self {
            email: format!("vecina{suffix}-{nonce}@example.com"),
            password: "contrasena-123".to_string(),
            name: format!("Vecina {suffix}"),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Create room request
#[derive(Debug, Serialize)]
pub struct CreateRoomRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl CreateRoomRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Sala de Prueba {suffix}"),
            avatar: None,
        }
    }
}

/// Room response
#[derive(Debug, Deserialize)]
pub struct RoomResponse {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub created_at: String,
}

/// Post message request
#[derive(Debug, Serialize)]
pub struct PostMessageRequest {
    pub message: String,
}

/// Message response
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub id: String,
    pub room_id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_avatar: String,
    pub message: String,
    pub created_at: String,
}

/// Create event request
#[derive(Debug, Serialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: Option<String>,
    pub date: String,
    pub location: Option<String>,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attendees: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl CreateEventRequest {
    pub fn unique(max_attendees: Option<i32>) -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Evento de Prueba {suffix}"),
            description: Some("Evento creado por las pruebas".to_string()),
            date: "2027-06-15T18:00:00Z".to_string(),
            location: Some("Plaza Central".to_string()),
            category: "comunidad".to_string(),
            max_attendees,
            image_url: None,
        }
    }
}

/// Event response
#[derive(Debug, Deserialize)]
pub struct EventResponse {
    pub id: String,
    pub title: String,
    pub category: String,
    pub organizer_id: String,
    pub organizer_name: String,
    pub max_attendees: Option<i32>,
    pub current_attendees: i32,
    pub is_active: bool,
}

/// Attend confirmation response
#[derive(Debug, Deserialize)]
pub struct AttendResponse {
    pub message: String,
}

/// Create service listing request
#[derive(Debug, Serialize)]
pub struct CreateListingRequest {
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl CreateListingRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Servicio de Prueba {suffix}"),
            category: "gasfiteria".to_string(),
            description: Some("Listado creado por las pruebas".to_string()),
            phone: Some("+56 9 1234 5678".to_string()),
            email: None,
            address: Some("Calle Falsa 123".to_string()),
            image_url: None,
        }
    }
}

/// Service listing response
#[derive(Debug, Deserialize)]
pub struct ListingResponse {
    pub id: String,
    pub name: String,
    pub category: String,
    pub rating: f64,
    pub review_count: i32,
    pub is_verified: bool,
}
