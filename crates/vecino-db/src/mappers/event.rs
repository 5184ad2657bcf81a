//! Event entity <-> model mapper

use vecino_core::entities::CommunityEvent;

use crate::models::EventModel;

impl From<EventModel> for CommunityEvent {
    fn from(model: EventModel) -> Self {
        CommunityEvent {
            id: model.id,
            title: model.title,
            description: model.description,
            date: model.date,
            location: model.location,
            category: model.category,
            organizer_id: model.organizer_id,
            organizer_name: model.organizer_name,
            max_attendees: model.max_attendees,
            current_attendees: model.current_attendees,
            image_url: model.image_url,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}
