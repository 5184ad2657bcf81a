//! Service directory handlers
//!
//! Browsing the directory is public; adding a listing requires
//! authentication. New listings start unverified.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;
use vecino_service::{CreateListingRequest, ListingResponse, ListingService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Query parameters for listing browsing
#[derive(Debug, Deserialize)]
pub struct ListingsQuery {
    pub category: Option<String>,
}

/// List service listings ordered by rating
///
/// GET /api/services?category=
pub async fn list_services(
    State(state): State<AppState>,
    Query(query): Query<ListingsQuery>,
) -> ApiResult<Json<Vec<ListingResponse>>> {
    let service = ListingService::new(state.service_context());
    let listings = service.list(query.category.as_deref()).await?;
    Ok(Json(listings))
}

/// Get a single service listing
///
/// GET /api/services/:listing_id
pub async fn get_service(
    State(state): State<AppState>,
    Path(listing_id): Path<Uuid>,
) -> ApiResult<Json<ListingResponse>> {
    let service = ListingService::new(state.service_context());
    let listing = service.get(listing_id).await?;
    Ok(Json(listing))
}

/// Create a new service listing
///
/// POST /api/services
pub async fn create_service(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateListingRequest>,
) -> ApiResult<Json<ListingResponse>> {
    let service = ListingService::new(state.service_context());
    let listing = service.create(request).await?;
    Ok(Json(listing))
}
