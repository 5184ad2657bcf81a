//! PostgreSQL implementation of ListingRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use vecino_core::entities::ServiceListing;
use vecino_core::traits::{ListingRepository, RepoResult};

use crate::models::ListingModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ListingRepository
#[derive(Clone)]
pub struct PgListingRepository {
    pool: PgPool,
}

impl PgListingRepository {
    /// Create a new PgListingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListingRepository for PgListingRepository {
    #[instrument(skip(self))]
    async fn list(&self, category: Option<&str>) -> RepoResult<Vec<ServiceListing>> {
        let rows = match category {
            Some(category) => {
                sqlx::query_as::<_, ListingModel>(
                    r"
                    SELECT id, name, category, description, phone, email, address,
                           image_url, rating, review_count, is_verified, created_at
                    FROM services
                    WHERE category = $1
                    ORDER BY rating DESC
                    ",
                )
                .bind(category)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, ListingModel>(
                    r"
                    SELECT id, name, category, description, phone, email, address,
                           image_url, rating, review_count, is_verified, created_at
                    FROM services
                    ORDER BY rating DESC
                    ",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ServiceListing::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ServiceListing>> {
        let result = sqlx::query_as::<_, ListingModel>(
            r"
            SELECT id, name, category, description, phone, email, address,
                   image_url, rating, review_count, is_verified, created_at
            FROM services
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ServiceListing::from))
    }

    #[instrument(skip(self, listing))]
    async fn create(&self, listing: &ServiceListing) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO services (id, name, category, description, phone, email, address,
                                  image_url, rating, review_count, is_verified, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(listing.id)
        .bind(&listing.name)
        .bind(&listing.category)
        .bind(&listing.description)
        .bind(&listing.phone)
        .bind(&listing.email)
        .bind(&listing.address)
        .bind(&listing.image_url)
        .bind(listing.rating)
        .bind(listing.review_count)
        .bind(listing.is_verified)
        .bind(listing.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
