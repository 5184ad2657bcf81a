//! Service listing entity - a local business in the neighborhood directory

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A local business or service listed in the directory
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceListing {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub image_url: Option<String>,
    pub rating: f64,
    pub review_count: i32,
    /// Listings start unverified; there is no promotion workflow in scope
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl ServiceListing {
    /// Create a fresh, unverified listing with no reviews yet
    pub fn new(id: Uuid, name: String, category: String) -> Self {
        Self {
            id,
            name,
            category,
            description: None,
            phone: None,
            email: None,
            address: None,
            image_url: None,
            rating: 0.0,
            review_count: 0,
            is_verified: false,
            created_at: Utc::now(),
        }
    }
}
