//! # vecino-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    AttendResponse, AuthResponse, CreateEventRequest, CreateListingRequest, CreateMessageRequest,
    CreateRoomRequest, EventResponse, EventAttendeeResponse, ListingResponse, LoginRequest,
    MessageResponse, RegisterRequest, RoomResponse, UserResponse,
};
pub use services::{
    AuthService, ChatService, EventService, ListingService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
