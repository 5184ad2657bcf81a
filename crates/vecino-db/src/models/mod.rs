//! Database models - SQLx-compatible structs for PostgreSQL tables

mod attendee;
mod event;
mod listing;
mod message;
mod room;
mod user;

pub use attendee::AttendeeModel;
pub use event::EventModel;
pub use listing::ListingModel;
pub use message::MessageModel;
pub use room::RoomModel;
pub use user::UserModel;
