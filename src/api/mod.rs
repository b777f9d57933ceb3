use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::services::{RatingService, TourService};
use crate::state::SharedState;

mod error;
pub mod links;
mod observability;
pub mod paging;
mod ratings;
mod system;
mod tour_ratings;
mod tours;
mod types;
mod validation;

pub use error::ApiError;
pub use links::LinkBuilder;
pub use types::*;

use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub links: LinkBuilder,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }

    #[must_use]
    pub fn rating_service(&self) -> &Arc<dyn RatingService> {
        &self.shared.rating_service
    }

    #[must_use]
    pub fn tour_service(&self) -> &Arc<dyn TourService> {
        &self.shared.tour_service
    }
}

#[must_use]
pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    let links = LinkBuilder::new(&shared.config.server.public_url);

    Arc::new(AppState {
        shared,
        links,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared, prometheus_handle))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config().server.cors_allowed_origins.clone();

    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .route("/ratings", get(ratings::list_ratings))
        .route("/ratings/{id}", get(ratings::get_rating))
        .route("/tours", get(tours::list_tours).post(tours::create_tour))
        .route(
            "/tours/{tour_id}",
            get(tours::get_tour).delete(tours::delete_tour),
        )
        .route(
            "/tours/{tour_id}/ratings",
            get(tour_ratings::list_tour_ratings)
                .post(tour_ratings::create_rating)
                .put(tour_ratings::update_rating)
                .patch(tour_ratings::patch_rating),
        )
        .route(
            "/tours/{tour_id}/ratings/average",
            get(tour_ratings::get_average),
        )
        // POST takes a score here, DELETE a customer id.
        .route(
            "/tours/{tour_id}/ratings/{value}",
            post(tour_ratings::rate_many).delete(tour_ratings::delete_rating),
        )
        .route("/packages", get(tours::list_packages))
        .route("/packages/search", get(tours::search_packages))
        .route("/packages/{code}", get(tours::get_package))
        .route("/health", get(system::health))
        .route("/metrics", get(observability::get_metrics))
        .with_state(state)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::logging_middleware))
}
