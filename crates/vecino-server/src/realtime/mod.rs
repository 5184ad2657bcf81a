//! Realtime hub
//!
//! Push-based message delivery over WebSocket connections. The hub owns an
//! in-process connection registry with room membership kept as a reverse
//! index for O(1) fan-out. All hub state is ephemeral: it reflects which
//! connections are currently subscribed where, and nothing more.

mod connection;
mod handler;
mod hub;
mod protocol;

pub use connection::ClientConnection;
pub use handler::ws_handler;
pub use hub::RealtimeHub;
pub use protocol::{ClientEvent, ServerEvent};
