//! Rating endpoints nested under a tour.
//!
//! Not-found conditions from the rating service come back as 404 with the
//! service message as a plain-text body.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;

use super::paging::{PageParams, sort_link_query};
use super::validation::{
    parse_customer_ids, require_customer_id, require_score, validate_comment, validate_id,
    validate_score,
};
use super::{ApiError, AppState, AverageDto, PagedDto, RatingDto, RatingRequest};
use crate::domain::{CustomerId, RatingSort, TourId};

#[derive(Debug, Deserialize)]
pub struct RateManyQuery {
    pub customers: String,
}

fn tour_id(id: i32) -> Result<TourId, ApiError> {
    validate_id("tour", id).map(TourId::new)
}

/// `POST /tours/{tour_id}/ratings`
pub async fn create_rating(
    State(state): State<Arc<AppState>>,
    Path(tour): Path<i32>,
    Json(payload): Json<RatingRequest>,
) -> Result<(StatusCode, Json<RatingDto>), ApiError> {
    let tour = tour_id(tour)?;
    let customer = require_customer_id(payload.customer_id)?;
    let score = require_score(payload.score)?;
    let comment = validate_comment(payload.comment)?;

    let rating = state
        .rating_service()
        .create_new(tour, customer, score, comment)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RatingDto::from_rating(rating, &state.links)),
    ))
}

/// `POST /tours/{tour_id}/ratings/{score}?customers=1,2,3`
pub async fn rate_many(
    State(state): State<Arc<AppState>>,
    Path((tour, score)): Path<(i32, i32)>,
    Query(query): Query<RateManyQuery>,
) -> Result<(StatusCode, Json<Vec<RatingDto>>), ApiError> {
    let tour = tour_id(tour)?;
    let score = validate_score(score)?;
    let customers = parse_customer_ids(&query.customers)?;

    let ratings = state
        .rating_service()
        .rate_many(tour, score, &customers)
        .await?;

    let dtos = ratings
        .into_iter()
        .map(|r| RatingDto::from_rating(r, &state.links))
        .collect();

    Ok((StatusCode::CREATED, Json(dtos)))
}

/// `GET /tours/{tour_id}/ratings?page=&size=&sort=`
pub async fn list_tour_ratings(
    State(state): State<Arc<AppState>>,
    Path(tour): Path<i32>,
    Query(params): Query<PageParams>,
) -> Result<Json<PagedDto<RatingDto>>, ApiError> {
    let tour = tour_id(tour)?;
    let request = params.to_request::<RatingSort>(&state.config().paging)?;
    let link_query = sort_link_query(&request);

    let page = state.rating_service().lookup_ratings(tour, request).await?;
    let links = state
        .links
        .page_links(&format!("/tours/{tour}/ratings"), &link_query, &page);

    let page = page.map(|r| RatingDto::from_rating(r, &state.links));
    Ok(Json(PagedDto::new(page, links)))
}

/// `GET /tours/{tour_id}/ratings/average`
pub async fn get_average(
    State(state): State<Arc<AppState>>,
    Path(tour): Path<i32>,
) -> Result<Json<AverageDto>, ApiError> {
    let average = state
        .rating_service()
        .get_average_score(tour_id(tour)?)
        .await?;

    Ok(Json(AverageDto { average }))
}

/// `PUT /tours/{tour_id}/ratings`
pub async fn update_rating(
    State(state): State<Arc<AppState>>,
    Path(tour): Path<i32>,
    Json(payload): Json<RatingRequest>,
) -> Result<Json<RatingDto>, ApiError> {
    let tour = tour_id(tour)?;
    let customer = require_customer_id(payload.customer_id)?;
    let score = require_score(payload.score)?;
    let comment = validate_comment(payload.comment)?;

    let rating = state
        .rating_service()
        .update(tour, customer, score, comment)
        .await?;

    Ok(Json(RatingDto::from_rating(rating, &state.links)))
}

/// `PATCH /tours/{tour_id}/ratings`
pub async fn patch_rating(
    State(state): State<Arc<AppState>>,
    Path(tour): Path<i32>,
    Json(payload): Json<RatingRequest>,
) -> Result<Json<RatingDto>, ApiError> {
    let tour = tour_id(tour)?;
    let customer = require_customer_id(payload.customer_id)?;
    let score = payload.score.map(validate_score).transpose()?;
    let comment = validate_comment(payload.comment)?;

    let rating = state
        .rating_service()
        .update_some(tour, customer, score, comment)
        .await?;

    Ok(Json(RatingDto::from_rating(rating, &state.links)))
}

/// `DELETE /tours/{tour_id}/ratings/{customer_id}`
pub async fn delete_rating(
    State(state): State<Arc<AppState>>,
    Path((tour, customer)): Path<(i32, i32)>,
) -> Result<StatusCode, ApiError> {
    let tour = tour_id(tour)?;
    let customer = CustomerId::new(customer);

    state.rating_service().delete(tour, customer).await?;

    Ok(StatusCode::OK)
}
