use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{RatingService, SeaOrmRatingService, SeaOrmTourService, TourService};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub rating_service: Arc<dyn RatingService>,

    pub tour_service: Arc<dyn TourService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Ok(Self::with_store(config, store))
    }

    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let rating_service = Arc::new(SeaOrmRatingService::new(store.clone()))
            as Arc<dyn RatingService + Send + Sync + 'static>;

        let tour_service = Arc::new(SeaOrmTourService::new(store.clone()))
            as Arc<dyn TourService + Send + Sync + 'static>;

        Self {
            config: Arc::new(config),
            store,
            rating_service,
            tour_service,
        }
    }
}
