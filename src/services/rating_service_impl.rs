//! `SeaORM` implementation of the `RatingService` trait.

use crate::db::{RatingRepository, Store, TourRepository};
use crate::domain::{CustomerId, Page, PageRequest, RatingId, RatingSort, TourId};
use crate::models::{NewRating, Tour, TourRating, average_score, default_comment};
use crate::services::rating_service::{RatingError, RatingService};
use async_trait::async_trait;
use sea_orm::ConnectionTrait;
use tracing::{debug, info};

pub struct SeaOrmRatingService {
    store: Store,
}

impl SeaOrmRatingService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    async fn verify_tour<C: ConnectionTrait>(conn: &C, tour_id: TourId) -> Result<Tour, RatingError> {
        TourRepository::new(conn)
            .find_by_id(tour_id)
            .await?
            .ok_or(RatingError::TourNotFound(tour_id))
    }

    async fn verify_tour_rating<C: ConnectionTrait>(
        conn: &C,
        tour_id: TourId,
        customer_id: CustomerId,
    ) -> Result<TourRating, RatingError> {
        RatingRepository::new(conn)
            .find_by_tour_and_customer(tour_id, customer_id)
            .await?
            .ok_or(RatingError::RatingNotFound {
                tour_id,
                customer_id,
            })
    }
}

#[async_trait]
impl RatingService for SeaOrmRatingService {
    async fn create_new(
        &self,
        tour_id: TourId,
        customer_id: CustomerId,
        score: i32,
        comment: Option<String>,
    ) -> Result<TourRating, RatingError> {
        info!("Create rating for tour {} of customer {}", tour_id, customer_id);

        let txn = self.store.begin().await?;
        let tour = Self::verify_tour(&txn, tour_id).await?;

        let rating = RatingRepository::new(&txn)
            .insert(&NewRating::new(tour.id, customer_id, score, comment))
            .await?;

        txn.commit().await?;
        Ok(rating)
    }

    async fn lookup_all(&self) -> Result<Vec<TourRating>, RatingError> {
        info!("Lookup all ratings");

        let txn = self.store.begin().await?;
        let ratings = RatingRepository::new(&txn).find_all().await?;
        txn.commit().await?;

        Ok(ratings)
    }

    async fn lookup_rating_by_id(&self, id: RatingId) -> Result<Option<TourRating>, RatingError> {
        info!("Lookup rating {}", id);

        let txn = self.store.begin().await?;
        let rating = RatingRepository::new(&txn).find_by_id(id).await?;
        txn.commit().await?;

        Ok(rating)
    }

    async fn lookup_ratings(
        &self,
        tour_id: TourId,
        request: PageRequest<RatingSort>,
    ) -> Result<Page<TourRating>, RatingError> {
        info!(
            "Lookup ratings for tour {} (page {}, size {})",
            tour_id, request.number, request.size
        );

        let txn = self.store.begin().await?;
        let tour = Self::verify_tour(&txn, tour_id).await?;
        let page = RatingRepository::new(&txn)
            .find_page_by_tour(tour.id, &request)
            .await?;
        txn.commit().await?;

        Ok(page)
    }

    async fn update(
        &self,
        tour_id: TourId,
        customer_id: CustomerId,
        score: i32,
        comment: Option<String>,
    ) -> Result<TourRating, RatingError> {
        info!(
            "Update all of rating for tour {} of customer {}",
            tour_id, customer_id
        );

        let txn = self.store.begin().await?;
        let mut rating = Self::verify_tour_rating(&txn, tour_id, customer_id).await?;

        rating.score = score;
        rating.comment = comment.unwrap_or_else(|| default_comment(score));

        let saved = RatingRepository::new(&txn).save(&rating).await?;
        txn.commit().await?;

        Ok(saved)
    }

    async fn update_some(
        &self,
        tour_id: TourId,
        customer_id: CustomerId,
        score: Option<i32>,
        comment: Option<String>,
    ) -> Result<TourRating, RatingError> {
        info!(
            "Update some of rating for tour {} of customer {}",
            tour_id, customer_id
        );

        let txn = self.store.begin().await?;
        let mut rating = Self::verify_tour_rating(&txn, tour_id, customer_id).await?;

        if let Some(score) = score {
            rating.score = score;
        }
        if let Some(comment) = comment {
            rating.comment = comment;
        }

        let saved = RatingRepository::new(&txn).save(&rating).await?;
        txn.commit().await?;

        Ok(saved)
    }

    async fn delete(&self, tour_id: TourId, customer_id: CustomerId) -> Result<(), RatingError> {
        info!(
            "Delete rating for tour {} and customer {}",
            tour_id, customer_id
        );

        let txn = self.store.begin().await?;
        let rating = Self::verify_tour_rating(&txn, tour_id, customer_id).await?;
        RatingRepository::new(&txn).delete(rating.id).await?;
        txn.commit().await?;

        Ok(())
    }

    async fn get_average_score(&self, tour_id: TourId) -> Result<Option<f64>, RatingError> {
        info!("Get average score of tour {}", tour_id);

        let txn = self.store.begin().await?;
        let tour = Self::verify_tour(&txn, tour_id).await?;
        let scores = RatingRepository::new(&txn).scores_for_tour(tour.id).await?;
        txn.commit().await?;

        Ok(average_score(&scores))
    }

    async fn rate_many(
        &self,
        tour_id: TourId,
        score: i32,
        customer_ids: &[CustomerId],
    ) -> Result<Vec<TourRating>, RatingError> {
        info!(
            "Rate tour {} by customers {:?}",
            tour_id,
            customer_ids.iter().map(CustomerId::value).collect::<Vec<_>>()
        );

        let txn = self.store.begin().await?;
        let tour = Self::verify_tour(&txn, tour_id).await?;

        let repo = RatingRepository::new(&txn);
        let mut created = Vec::with_capacity(customer_ids.len());
        for &customer_id in customer_ids {
            debug!("Attempt to create tour rating for customer {}", customer_id);
            created.push(
                repo.insert(&NewRating::new(tour.id, customer_id, score, None))
                    .await?,
            );
        }

        txn.commit().await?;
        Ok(created)
    }
}
