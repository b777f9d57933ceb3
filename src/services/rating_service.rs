//! Domain service for tour ratings.
//!
//! Verifies that referenced tours and (tour, customer) pairs exist, computes
//! average scores and applies full or partial updates. Duplicate ratings are
//! left to the unique index on `(tour_id, customer_id)`; the resulting
//! database error is returned unchanged.

use crate::domain::{CustomerId, Page, PageRequest, RatingId, RatingSort, TourId};
use crate::models::TourRating;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Errors raised by rating operations.
#[derive(Debug, Error)]
pub enum RatingError {
    #[error("Tour does not exist {0}")]
    TourNotFound(TourId),

    #[error("Tour-Rating pair for request({tour_id} for customer {customer_id})")]
    RatingNotFound {
        tour_id: TourId,
        customer_id: CustomerId,
    },

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl RatingError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::TourNotFound(_) | Self::RatingNotFound { .. })
    }

    /// True when the store rejected a second rating for the same tour and
    /// customer.
    #[must_use]
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            Self::Database(err) => matches!(
                err.sql_err(),
                Some(SqlErr::UniqueConstraintViolation(_))
            ),
            _ => false,
        }
    }
}

/// Domain service trait for tour ratings.
///
/// Every call runs in its own transaction: committed when the call succeeds,
/// rolled back on any error.
#[async_trait::async_trait]
pub trait RatingService: Send + Sync {
    /// Stores a new rating. A missing comment defaults to the score's label.
    ///
    /// # Errors
    ///
    /// - [`RatingError::TourNotFound`] if the tour does not exist
    /// - [`RatingError::Database`] if the customer already rated the tour
    async fn create_new(
        &self,
        tour_id: TourId,
        customer_id: CustomerId,
        score: i32,
        comment: Option<String>,
    ) -> Result<TourRating, RatingError>;

    /// Every rating, unfiltered and unpaged.
    async fn lookup_all(&self) -> Result<Vec<TourRating>, RatingError>;

    async fn lookup_rating_by_id(&self, id: RatingId) -> Result<Option<TourRating>, RatingError>;

    /// One page of a tour's ratings.
    ///
    /// # Errors
    ///
    /// [`RatingError::TourNotFound`] if the tour does not exist.
    async fn lookup_ratings(
        &self,
        tour_id: TourId,
        request: PageRequest<RatingSort>,
    ) -> Result<Page<TourRating>, RatingError>;

    /// Replaces score and comment of an existing rating.
    ///
    /// # Errors
    ///
    /// [`RatingError::RatingNotFound`] if the customer has not rated the tour.
    async fn update(
        &self,
        tour_id: TourId,
        customer_id: CustomerId,
        score: i32,
        comment: Option<String>,
    ) -> Result<TourRating, RatingError>;

    /// Replaces only the fields that are present.
    ///
    /// # Errors
    ///
    /// [`RatingError::RatingNotFound`] if the customer has not rated the tour.
    async fn update_some(
        &self,
        tour_id: TourId,
        customer_id: CustomerId,
        score: Option<i32>,
        comment: Option<String>,
    ) -> Result<TourRating, RatingError>;

    /// # Errors
    ///
    /// [`RatingError::RatingNotFound`] if the customer has not rated the tour.
    async fn delete(&self, tour_id: TourId, customer_id: CustomerId) -> Result<(), RatingError>;

    /// Mean score of a tour, `None` while it has no ratings.
    ///
    /// # Errors
    ///
    /// [`RatingError::TourNotFound`] if the tour does not exist.
    async fn get_average_score(&self, tour_id: TourId) -> Result<Option<f64>, RatingError>;

    /// Gives the same score on behalf of many customers.
    ///
    /// All inserts share one transaction: if any customer already rated the
    /// tour, nothing from this call is kept.
    ///
    /// # Errors
    ///
    /// - [`RatingError::TourNotFound`] if the tour does not exist
    /// - [`RatingError::Database`] on the first duplicate rating
    async fn rate_many(
        &self,
        tour_id: TourId,
        score: i32,
        customer_ids: &[CustomerId],
    ) -> Result<Vec<TourRating>, RatingError>;
}
