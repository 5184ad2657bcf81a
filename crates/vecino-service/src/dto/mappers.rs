//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use vecino_core::entities::{
    ChatMessage, ChatRoom, CommunityEvent, EventAttendee, ServiceListing, User,
};

use super::responses::{
    EventAttendeeResponse, EventResponse, ListingResponse, MessageResponse, RoomResponse,
    UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Chat Mappers
// ============================================================================

impl From<&ChatRoom> for RoomResponse {
    fn from(room: &ChatRoom) -> Self {
        Self {
            id: room.id,
            name: room.name.clone(),
            avatar: room.avatar.clone(),
            created_at: room.created_at,
        }
    }
}

impl From<ChatRoom> for RoomResponse {
    fn from(room: ChatRoom) -> Self {
        Self::from(&room)
    }
}

impl From<&ChatMessage> for MessageResponse {
    fn from(message: &ChatMessage) -> Self {
        Self {
            id: message.id,
            room_id: message.room_id,
            user_id: message.user_id,
            user_name: message.user_name.clone(),
            user_avatar: message.user_avatar.clone(),
            message: message.message.clone(),
            created_at: message.created_at,
        }
    }
}

impl From<ChatMessage> for MessageResponse {
    fn from(message: ChatMessage) -> Self {
        Self::from(&message)
    }
}

// ============================================================================
// Event Mappers
// ============================================================================

impl From<&CommunityEvent> for EventResponse {
    fn from(event: &CommunityEvent) -> Self {
        Self {
            id: event.id,
            title: event.title.clone(),
            description: event.description.clone(),
            date: event.date,
            location: event.location.clone(),
            category: event.category.clone(),
            organizer_id: event.organizer_id,
            organizer_name: event.organizer_name.clone(),
            max_attendees: event.max_attendees,
            current_attendees: event.current_attendees,
            image_url: event.image_url.clone(),
            is_active: event.is_active,
        }
    }
}

impl From<CommunityEvent> for EventResponse {
    fn from(event: CommunityEvent) -> Self {
        Self::from(&event)
    }
}

impl From<&EventAttendee> for EventAttendeeResponse {
    fn from(attendee: &EventAttendee) -> Self {
        Self {
            event_id: attendee.event_id,
            user_id: attendee.user_id,
            user_name: attendee.user_name.clone(),
            user_email: attendee.user_email.clone(),
        }
    }
}

impl From<EventAttendee> for EventAttendeeResponse {
    fn from(attendee: EventAttendee) -> Self {
        Self::from(&attendee)
    }
}

// ============================================================================
// Service Directory Mappers
// ============================================================================

impl From<&ServiceListing> for ListingResponse {
    fn from(listing: &ServiceListing) -> Self {
        Self {
            id: listing.id,
            name: listing.name.clone(),
            category: listing.category.clone(),
            description: listing.description.clone(),
            phone: listing.phone.clone(),
            email: listing.email.clone(),
            address: listing.address.clone(),
            image_url: listing.image_url.clone(),
            rating: listing.rating,
            review_count: listing.review_count,
            is_verified: listing.is_verified,
        }
    }
}

impl From<ServiceListing> for ListingResponse {
    fn from(listing: ServiceListing) -> Self {
        Self::from(&listing)
    }
}
