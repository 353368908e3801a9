use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::error::AppError;
use crate::models::{Destination, Review, Service};
use crate::search::{filter_destinations, SearchParams};
use crate::state::AppState;

/// POST /api/search
///
/// Body: the five optional search criteria. A body that does not match the
/// optional-string shape is a 400; a search that matches nothing is an empty
/// 200 array, not an error.
pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SearchParams>, JsonRejection>,
) -> Result<Json<Vec<Destination>>, AppError> {
    let Json(params) = payload.map_err(|_| AppError::InvalidPayload)?;

    let catalog = state.storage.destinations().await?;
    let results = filter_destinations(catalog, &params);

    debug!("search matched {} destinations", results.len());
    Ok(Json(results))
}

#[derive(Deserialize)]
pub struct DestinationListQuery {
    pub query: Option<String>,
    pub category: Option<String>,
}

/// GET /api/destinations?query=&category=
pub async fn destinations_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DestinationListQuery>,
) -> Result<Json<Vec<Destination>>, AppError> {
    let catalog = state.storage.destinations().await?;
    let results = filter_destinations(catalog, &SearchParams::new(params.query, params.category));

    Ok(Json(results))
}

/// GET /api/destinations/{id}
pub async fn destination_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Destination>, AppError> {
    let destination = state
        .storage
        .destination(&id)
        .await?
        .ok_or(AppError::NotFound("Destination"))?;

    Ok(Json(destination))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewListQuery {
    pub destination_id: Option<String>,
}

/// GET /api/reviews?destinationId=
pub async fn reviews_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReviewListQuery>,
) -> Result<Json<Vec<Review>>, AppError> {
    let reviews = match params.destination_id {
        Some(id) => state.storage.reviews_by_destination(&id).await?,
        None => state.storage.reviews().await?,
    };

    Ok(Json(reviews))
}

#[derive(Deserialize)]
pub struct ServiceListQuery {
    pub category: Option<String>,
}

/// GET /api/services?category=
pub async fn services_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ServiceListQuery>,
) -> Result<Json<Vec<Service>>, AppError> {
    let services = match params.category {
        Some(category) => state.storage.services_by_category(&category).await?,
        None => state.storage.services().await?,
    };

    Ok(Json(services))
}
