//! Community event entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A community event with a denormalized attendance counter
///
/// `current_attendees` mirrors the number of attendee rows for the event.
/// The counter is maintained by the attendance service through conditional
/// updates; the entity itself only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityEvent {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub location: Option<String>,
    pub category: String,
    pub organizer_id: Uuid,
    pub organizer_name: String,
    /// None means unlimited capacity
    pub max_attendees: Option<i32>,
    pub current_attendees: i32,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl CommunityEvent {
    /// Check whether the event has reached its capacity
    pub fn is_full(&self) -> bool {
        match self.max_attendees {
            Some(max) => self.current_attendees >= max,
            None => false,
        }
    }

    /// Remaining seats, if the event is capped
    pub fn remaining_capacity(&self) -> Option<i32> {
        self.max_attendees
            .map(|max| (max - self.current_attendees).max(0))
    }
}
