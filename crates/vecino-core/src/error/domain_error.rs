//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Room not found: {0}")]
    RoomNotFound(Uuid),

    #[error("Event not found: {0}")]
    EventNotFound(Uuid),

    #[error("Service not found: {0}")]
    ListingNotFound(Uuid),

    #[error("Not registered for this event")]
    AttendeeNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Already registered for this event")]
    AlreadyRegistered,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Event is full")]
    EventFull,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::RoomNotFound(_) => "UNKNOWN_ROOM",
            Self::EventNotFound(_) => "UNKNOWN_EVENT",
            Self::ListingNotFound(_) => "UNKNOWN_SERVICE",
            Self::AttendeeNotFound => "NOT_REGISTERED",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::AlreadyRegistered => "ALREADY_REGISTERED",

            // Business Rules
            Self::EventFull => "EVENT_FULL",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::RoomNotFound(_)
                | Self::EventNotFound(_)
                | Self::ListingNotFound(_)
                | Self::AttendeeNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    /// Check if this is a conflict error
    ///
    /// Note: the public API reports these with status 400, not 409; the
    /// legacy contract pinned duplicate registration to a plain bad request.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists | Self::AlreadyRegistered)
    }

    /// Check if this is a capacity violation
    pub fn is_capacity(&self) -> bool {
        matches!(self, Self::EventFull)
    }
}
