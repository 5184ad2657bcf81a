//! Service listing database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the services table
#[derive(Debug, Clone, FromRow)]
pub struct ListingModel {
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
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}
