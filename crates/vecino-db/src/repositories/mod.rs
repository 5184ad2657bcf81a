//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in vecino-core.
//! Each repository handles database operations for a specific domain entity.

mod attendee;
mod error;
mod event;
mod listing;
mod message;
mod room;
mod user;

pub use attendee::PgAttendeeRepository;
pub use event::PgEventRepository;
pub use listing::PgListingRepository;
pub use message::PgMessageRepository;
pub use room::PgRoomRepository;
pub use user::PgUserRepository;
