//! Chat message entity <-> model mapper

use vecino_core::entities::ChatMessage;

use crate::models::MessageModel;

impl From<MessageModel> for ChatMessage {
    fn from(model: MessageModel) -> Self {
        ChatMessage {
            id: model.id,
            room_id: model.room_id,
            user_id: model.user_id,
            user_name: model.user_name,
            user_avatar: model.user_avatar,
            message: model.message,
            created_at: model.created_at,
        }
    }
}
