//! Service directory service
//!
//! Handles the local-business listings: browsing by category and creating
//! new, unverified entries.

use tracing::{info, instrument};
use uuid::Uuid;
use vecino_core::entities::ServiceListing;
use vecino_core::DomainError;

use crate::dto::{CreateListingRequest, ListingResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Service directory service
pub struct ListingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ListingService<'a> {
    /// Create a new ListingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List service listings ordered by rating, optionally by category
    #[instrument(skip(self))]
    pub async fn list(&self, category: Option<&str>) -> ServiceResult<Vec<ListingResponse>> {
        let listings = self.ctx.listing_repo().list(category).await?;
        Ok(listings.iter().map(ListingResponse::from).collect())
    }

    /// Get a single listing
    #[instrument(skip(self))]
    pub async fn get(&self, listing_id: Uuid) -> ServiceResult<ListingResponse> {
        let listing = self
            .ctx
            .listing_repo()
            .find_by_id(listing_id)
            .await?
            .ok_or(DomainError::ListingNotFound(listing_id))?;

        Ok(ListingResponse::from(&listing))
    }

    /// Create a new, unverified listing
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, request: CreateListingRequest) -> ServiceResult<ListingResponse> {
        let listing = ServiceListing {
            description: request.description,
            phone: request.phone,
            email: request.email,
            address: request.address,
            image_url: request.image_url,
            ..ServiceListing::new(Uuid::new_v4(), request.name, request.category)
        };

        self.ctx.listing_repo().create(&listing).await?;

        info!(listing_id = %listing.id, "Service listing created");

        Ok(ListingResponse::from(&listing))
    }
}
