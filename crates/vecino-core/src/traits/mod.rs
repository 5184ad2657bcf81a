//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AttendeeRepository, EventRepository, ListingRepository, MessageRepository, RepoResult,
    RoomRepository, UserRepository,
};
