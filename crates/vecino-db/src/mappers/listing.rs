//! Service listing entity <-> model mapper

use vecino_core::entities::ServiceListing;

use crate::models::ListingModel;

impl From<ListingModel> for ServiceListing {
    fn from(model: ListingModel) -> Self {
        ServiceListing {
            id: model.id,
            name: model.name,
            category: model.category,
            description: model.description,
            phone: model.phone,
            email: model.email,
            address: model.address,
            image_url: model.image_url,
            rating: model.rating,
            review_count: model.review_count,
            is_verified: model.is_verified,
            created_at: model.created_at,
        }
    }
}
