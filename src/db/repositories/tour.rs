use crate::domain::{Page, PageRequest, TourId, TourSort};
use crate::entities::{prelude::*, tours};
use crate::models::{NewTour, Tour, TourFilter};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, Select, Set,
};

pub struct TourRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> TourRepository<'a, C> {
    pub const fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    fn map_model(m: tours::Model) -> Tour {
        Tour {
            id: TourId::new(m.id),
            title: m.title,
            description: m.description,
            blurb: m.blurb,
            price: m.price,
            duration: m.duration,
            bullets: m.bullets,
            keywords: m.keywords,
            package_code: m.tour_package_code,
            difficulty: m.difficulty,
            region: m.region,
        }
    }

    fn apply_filter(mut query: Select<Tours>, filter: &TourFilter) -> Select<Tours> {
        if let Some(code) = &filter.package_code {
            query = query.filter(tours::Column::TourPackageCode.eq(code.as_str()));
        }

        if let Some(difficulty) = filter.difficulty {
            query = query.filter(tours::Column::Difficulty.eq(difficulty));
        }

        if let Some(region) = filter.region {
            query = query.filter(tours::Column::Region.eq(region));
        }

        if let Some(max_price) = filter.max_price {
            query = query.filter(tours::Column::Price.lte(max_price));
        }

        if let Some(keyword) = &filter.keyword {
            query = query.filter(tours::Column::Keywords.contains(keyword.as_str()));
        }

        query
    }

    pub async fn insert(&self, tour: &NewTour) -> Result<Tour, DbErr> {
        let model = tours::ActiveModel {
            title: Set(tour.title.clone()),
            description: Set(tour.description.clone()),
            blurb: Set(tour.blurb.clone()),
            price: Set(tour.price),
            duration: Set(tour.duration.clone()),
            bullets: Set(tour.bullets.clone()),
            keywords: Set(tour.keywords.clone()),
            tour_package_code: Set(tour.package_code.clone()),
            difficulty: Set(tour.difficulty),
            region: Set(tour.region),
            ..Default::default()
        }
        .insert(self.conn)
        .await?;

        Ok(Self::map_model(model))
    }

    pub async fn find_by_id(&self, id: TourId) -> Result<Option<Tour>, DbErr> {
        let row = Tours::find_by_id(id.value()).one(self.conn).await?;
        Ok(row.map(Self::map_model))
    }

    pub async fn find_page(
        &self,
        filter: &TourFilter,
        request: &PageRequest<TourSort>,
    ) -> Result<Page<Tour>, DbErr> {
        let mut query = Self::apply_filter(Tours::find(), filter);

        if let Some((field, order)) = request.sort {
            let column = match field {
                TourSort::Id => tours::Column::Id,
                TourSort::Title => tours::Column::Title,
                TourSort::Price => tours::Column::Price,
            };
            let order = if order.is_ascending() {
                Order::Asc
            } else {
                Order::Desc
            };
            query = query.order_by(column, order);
        }
        query = query.order_by_asc(tours::Column::Id);

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

    pub async fn delete(&self, id: TourId) -> Result<bool, DbErr> {
        let result = Tours::delete_by_id(id.value()).exec(self.conn).await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        Tours::find().count(self.conn).await
    }
}
