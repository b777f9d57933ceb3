use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;

use super::paging::{PageParams, sort_link_query};
use super::validation::validate_id;
use super::{ApiError, AppState, CollectionDto, PackageDto, PagedDto, TourDto};
use crate::domain::{Difficulty, Region, TourId, TourSort};
use crate::models::{NewTour, TourFilter};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourQuery {
    pub package: Option<String>,
    pub difficulty: Option<String>,
    pub region: Option<String>,
    pub max_price: Option<i32>,
    pub keyword: Option<String>,
}

impl TourQuery {
    fn to_filter(&self) -> Result<TourFilter, ApiError> {
        let difficulty = self
            .difficulty
            .as_deref()
            .map(|name| {
                Difficulty::find_by_name(name)
                    .ok_or_else(|| ApiError::validation(format!("Unknown difficulty '{name}'")))
            })
            .transpose()?;

        let region = self
            .region
            .as_deref()
            .map(|label| {
                Region::find_by_label(label)
                    .ok_or_else(|| ApiError::validation(format!("Unknown region '{label}'")))
            })
            .transpose()?;

        Ok(TourFilter {
            package_code: self.package.clone(),
            difficulty,
            region,
            max_price: self.max_price,
            keyword: self.keyword.clone(),
        })
    }

    fn link_query(&self) -> Vec<(&'static str, String)> {
        [
            ("package", self.package.clone()),
            ("difficulty", self.difficulty.clone()),
            ("region", self.region.clone()),
            ("maxPrice", self.max_price.map(|p| p.to_string())),
            ("keyword", self.keyword.clone()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTourRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub blurb: String,
    pub price: i32,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub bullets: String,
    #[serde(default)]
    pub keywords: String,
    pub package_code: String,
    pub difficulty: String,
    pub region: String,
}

impl CreateTourRequest {
    fn into_new_tour(self) -> Result<NewTour, ApiError> {
        if self.title.trim().is_empty() {
            return Err(ApiError::validation("Tour title cannot be empty"));
        }
        if self.price < 0 {
            return Err(ApiError::validation("Tour price cannot be negative"));
        }

        let difficulty = Difficulty::find_by_name(&self.difficulty).ok_or_else(|| {
            ApiError::validation(format!("Unknown difficulty '{}'", self.difficulty))
        })?;
        let region = Region::find_by_label(&self.region)
            .ok_or_else(|| ApiError::validation(format!("Unknown region '{}'", self.region)))?;

        Ok(NewTour {
            title: self.title,
            description: self.description,
            blurb: self.blurb,
            price: self.price,
            duration: self.duration,
            bullets: self.bullets,
            keywords: self.keywords,
            package_code: self.package_code,
            difficulty,
            region,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct PackageSearchQuery {
    pub name: String,
}

/// `GET /tours`
pub async fn list_tours(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TourQuery>,
    Query(params): Query<PageParams>,
) -> Result<Json<PagedDto<TourDto>>, ApiError> {
    let filter = query.to_filter()?;
    let request = params.to_request::<TourSort>(&state.config().paging)?;

    let mut link_query = query.link_query();
    link_query.extend(sort_link_query(&request));

    let page = state.tour_service().lookup_tours(filter, request).await?;

    let links = state.links.page_links("/tours", &link_query, &page);

    let page = page.map(|t| TourDto::from_tour(t, &state.links));
    Ok(Json(PagedDto::new(page, links)))
}

/// `POST /tours`
pub async fn create_tour(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateTourRequest>,
) -> Result<(StatusCode, Json<TourDto>), ApiError> {
    let tour = state
        .tour_service()
        .create_tour(payload.into_new_tour()?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(TourDto::from_tour(tour, &state.links)),
    ))
}

/// `GET /tours/{tour_id}`
pub async fn get_tour(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<TourDto>, ApiError> {
    let id = TourId::new(validate_id("tour", id)?);

    let tour = state
        .tour_service()
        .lookup_tour(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Tour", id))?;

    Ok(Json(TourDto::from_tour(tour, &state.links)))
}

/// `DELETE /tours/{tour_id}`
pub async fn delete_tour(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let id = TourId::new(validate_id("tour", id)?);
    state.tour_service().delete_tour(id).await?;
    Ok(StatusCode::OK)
}

/// `GET /packages`
pub async fn list_packages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CollectionDto<PackageDto>>, ApiError> {
    let packages = state.tour_service().lookup_packages().await?;

    let dtos = packages
        .into_iter()
        .map(|p| PackageDto::from_package(p, &state.links))
        .collect();

    Ok(Json(CollectionDto::new(
        "packages",
        dtos,
        state.links.href("/packages"),
    )))
}

/// `GET /packages/{code}`
pub async fn get_package(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<PackageDto>, ApiError> {
    let package = state
        .tour_service()
        .lookup_package(&code)
        .await?
        .ok_or_else(|| ApiError::not_found("Tour package", &code))?;

    Ok(Json(PackageDto::from_package(package, &state.links)))
}

/// `GET /packages/search?name=`
pub async fn search_packages(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PackageSearchQuery>,
) -> Result<Json<PackageDto>, ApiError> {
    let package = state
        .tour_service()
        .find_package_by_name(&query.name)
        .await?
        .ok_or_else(|| ApiError::not_found("Tour package", &query.name))?;

    Ok(Json(PackageDto::from_package(package, &state.links)))
}
