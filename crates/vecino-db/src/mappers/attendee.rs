//! Event attendee entity <-> model mapper

use vecino_core::entities::EventAttendee;

use crate::models::AttendeeModel;

impl From<AttendeeModel> for EventAttendee {
    fn from(model: AttendeeModel) -> Self {
        EventAttendee {
            event_id: model.event_id,
            user_id: model.user_id,
            user_name: model.user_name,
            user_email: model.user_email,
            created_at: model.created_at,
        }
    }
}
