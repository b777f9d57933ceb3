use crate::domain::{CustomerId, Page, PageRequest, RatingId, RatingSort, TourId};
use crate::entities::{prelude::*, tour_ratings};
use crate::models::{NewRating, TourRating};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

/// Repository for tour rating rows.
///
/// Borrows any connection, so the same calls run against the pool or inside
/// an open transaction.
pub struct RatingRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> RatingRepository<'a, C> {
    pub const fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    fn map_model(m: tour_ratings::Model) -> TourRating {
        TourRating {
            id: RatingId::new(m.id),
            tour_id: TourId::new(m.tour_id),
            customer_id: CustomerId::new(m.customer_id),
            score: m.score,
            comment: m.comment,
        }
    }

    const fn sort_column(field: RatingSort) -> tour_ratings::Column {
        match field {
            RatingSort::Id => tour_ratings::Column::Id,
            RatingSort::Score => tour_ratings::Column::Score,
            RatingSort::CustomerId => tour_ratings::Column::CustomerId,
            RatingSort::Comment => tour_ratings::Column::Comment,
        }
    }

    /// Inserts a rating. A second rating for the same tour and customer
    /// fails on the unique index.
    pub async fn insert(&self, rating: &NewRating) -> Result<TourRating, DbErr> {
        let model = tour_ratings::ActiveModel {
            tour_id: Set(rating.tour_id.value()),
            customer_id: Set(rating.customer_id.value()),
            score: Set(rating.score),
            comment: Set(rating.comment.clone()),
            ..Default::default()
        }
        .insert(self.conn)
        .await?;

        Ok(Self::map_model(model))
    }

    pub async fn find_all(&self) -> Result<Vec<TourRating>, DbErr> {
        let rows = TourRatings::find()
            .order_by_asc(tour_ratings::Column::Id)
            .all(self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn find_by_id(&self, id: RatingId) -> Result<Option<TourRating>, DbErr> {
        let row = TourRatings::find_by_id(id.value()).one(self.conn).await?;
        Ok(row.map(Self::map_model))
    }

    pub async fn find_by_tour_and_customer(
        &self,
        tour_id: TourId,
        customer_id: CustomerId,
    ) -> Result<Option<TourRating>, DbErr> {
        let row = TourRatings::find()
            .filter(tour_ratings::Column::TourId.eq(tour_id.value()))
            .filter(tour_ratings::Column::CustomerId.eq(customer_id.value()))
            .one(self.conn)
            .await?;

        Ok(row.map(Self::map_model))
    }

    pub async fn find_page_by_tour(
        &self,
        tour_id: TourId,
        request: &PageRequest<RatingSort>,
    ) -> Result<Page<TourRating>, DbErr> {
        let mut query = TourRatings::find().filter(tour_ratings::Column::TourId.eq(tour_id.value()));

        query = match request.sort {
            Some((field, order)) => {
                let order = if order.is_ascending() {
                    Order::Asc
                } else {
                    Order::Desc
                };
                query
                    .order_by(Self::sort_column(field), order)
                    .order_by_asc(tour_ratings::Column::Id)
            }
            None => query.order_by_asc(tour_ratings::Column::Id),
        };

        if request.offset().is_none() {
            return Err(DbErr::Custom(format!(
                "page {} of size {} is beyond the addressable range",
                request.number, request.size
            )));
        }

        let paginator = query.paginate(self.conn, request.size.max(1));
        let totals = paginator.num_items_and_pages().await?;
        let rows = paginator.fetch_page(request.number).await?;

        Ok(Page {
            content: rows.into_iter().map(Self::map_model).collect(),
            number: request.number,
            size: request.size,
            total_elements: totals.number_of_items,
            total_pages: totals.number_of_pages,
        })
    }

    pub async fn scores_for_tour(&self, tour_id: TourId) -> Result<Vec<i32>, DbErr> {
        TourRatings::find()
            .select_only()
            .column(tour_ratings::Column::Score)
            .filter(tour_ratings::Column::TourId.eq(tour_id.value()))
            .into_tuple::<i32>()
            .all(self.conn)
            .await
    }

    /// Writes score and comment back to an existing row.
    pub async fn save(&self, rating: &TourRating) -> Result<TourRating, DbErr> {
        let model = tour_ratings::ActiveModel {
            id: Set(rating.id.value()),
            score: Set(rating.score),
            comment: Set(rating.comment.clone()),
            ..Default::default()
        }
        .update(self.conn)
        .await?;

        Ok(Self::map_model(model))
    }

    pub async fn delete(&self, id: RatingId) -> Result<bool, DbErr> {
        let result = TourRatings::delete_by_id(id.value()).exec(self.conn).await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        TourRatings::find().count(self.conn).await
    }
}

