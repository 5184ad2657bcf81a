//! User entity - a registered neighbor account

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered user of the neighborhood platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Uuid, email: String, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            name,
            created_at: now,
            updated_at: now,
        }
    }
}
