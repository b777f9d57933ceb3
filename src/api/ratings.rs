use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::validation::validate_id;
use super::{ApiError, AppState, CollectionDto, RatingDto};
use crate::domain::RatingId;

/// `GET /ratings`
pub async fn list_ratings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CollectionDto<RatingDto>>, ApiError> {
    let ratings = state.rating_service().lookup_all().await?;

    let dtos = ratings
        .into_iter()
        .map(|r| RatingDto::from_rating(r, &state.links))
        .collect();

    Ok(Json(CollectionDto::new(
        "ratings",
        dtos,
        state.links.href("/ratings"),
    )))
}

/// `GET /ratings/{id}`
pub async fn get_rating(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<RatingDto>, ApiError> {
    let id = RatingId::new(validate_id("rating", id)?);

    let rating = state
        .rating_service()
        .lookup_rating_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Rating", id))?;

    Ok(Json(RatingDto::from_rating(rating, &state.links)))
}
