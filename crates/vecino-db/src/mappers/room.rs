//! Chat room entity <-> model mapper

use vecino_core::entities::ChatRoom;

use crate::models::RoomModel;

impl From<RoomModel> for ChatRoom {
    fn from(model: RoomModel) -> Self {
        ChatRoom {
            id: model.id,
            name: model.name,
            avatar: model.avatar,
            created_at: model.created_at,
        }
    }
}
