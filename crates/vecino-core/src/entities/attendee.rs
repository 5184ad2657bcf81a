//! Event attendee entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registration of a user to an event, unique per (event, user) pair
///
/// Name and email are snapshotted at registration time, mirroring the
/// write-time denormalization used for chat messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventAttendee {
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_email: String,
    pub created_at: DateTime<Utc>,
}

impl EventAttendee {
    pub fn new(event_id: Uuid, user_id: Uuid, user_name: String, user_email: String) -> Self {
        Self {
            event_id,
            user_id,
            user_name,
            user_email,
            created_at: Utc::now(),
        }
    }
}
