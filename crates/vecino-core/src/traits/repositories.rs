//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern: the domain layer defines what
//! it needs, and the infrastructure layer provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{ChatMessage, ChatRoom, CommunityEvent, EventAttendee, ServiceListing, User};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by email (exact, case-sensitive match)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, email: &str) -> RepoResult<Option<String>>;
}

// ============================================================================
// Room Repository
// ============================================================================

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// List all rooms in creation order (ascending)
    async fn list(&self) -> RepoResult<Vec<ChatRoom>>;

    /// Create a new room
    async fn create(&self, room: &ChatRoom) -> RepoResult<()>;

    /// Count existing rooms (used for first-run seeding)
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// List messages for a room ordered by creation ascending, capped at
    /// `limit` rows (the oldest `limit`, not the newest)
    async fn find_by_room(&self, room_id: Uuid, limit: i64) -> RepoResult<Vec<ChatMessage>>;

    /// Persist a new message
    async fn create(&self, message: &ChatMessage) -> RepoResult<()>;
}

// ============================================================================
// Event Repository
// ============================================================================

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// List active events ordered by date ascending, optionally filtered
    /// by category
    async fn list(&self, category: Option<&str>) -> RepoResult<Vec<CommunityEvent>>;

    /// Find event by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<CommunityEvent>>;

    /// Create a new event
    async fn create(&self, event: &CommunityEvent) -> RepoResult<()>;

    /// Atomically increment the attendance counter while the event still has
    /// capacity. Returns false when the event is full (or absent), in which
    /// case the counter is untouched.
    async fn try_increment_attendees(&self, id: Uuid) -> RepoResult<bool>;

    /// Decrement the attendance counter, floored at zero
    async fn decrement_attendees(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Attendee Repository
// ============================================================================

#[async_trait]
pub trait AttendeeRepository: Send + Sync {
    /// List attendees of an event
    async fn find_by_event(&self, event_id: Uuid) -> RepoResult<Vec<EventAttendee>>;

    /// Register an attendee. A duplicate (event, user) pair surfaces as
    /// `DomainError::AlreadyRegistered` via the unique-key violation.
    async fn create(&self, attendee: &EventAttendee) -> RepoResult<()>;

    /// Remove a registration. Returns false when no row existed.
    async fn delete(&self, event_id: Uuid, user_id: Uuid) -> RepoResult<bool>;
}

// ============================================================================
// Listing Repository
// ============================================================================

#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// List service listings ordered by rating descending, optionally
    /// filtered by category
    async fn list(&self, category: Option<&str>) -> RepoResult<Vec<ServiceListing>>;

    /// Find listing by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ServiceListing>>;

    /// Create a new listing
    async fn create(&self, listing: &ServiceListing) -> RepoResult<()>;
}
