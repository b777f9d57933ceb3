use crate::entities::{prelude::*, tour_packages};
use crate::models::TourPackage;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

pub struct TourPackageRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> TourPackageRepository<'a, C> {
    pub const fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    fn map_model(m: tour_packages::Model) -> TourPackage {
        TourPackage {
            code: m.code,
            name: m.name,
        }
    }

    pub async fn insert(&self, code: &str, name: &str) -> Result<TourPackage, DbErr> {
        let model = tour_packages::ActiveModel {
            code: Set(code.to_string()),
            name: Set(name.to_string()),
        }
        .insert(self.conn)
        .await?;

        Ok(Self::map_model(model))
    }

    pub async fn find_all(&self) -> Result<Vec<TourPackage>, DbErr> {
        let rows = TourPackages::find()
            .order_by_asc(tour_packages::Column::Code)
            .all(self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<TourPackage>, DbErr> {
        let row = TourPackages::find_by_id(code.to_string())
            .one(self.conn)
            .await?;
        Ok(row.map(Self::map_model))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<TourPackage>, DbErr> {
        let row = TourPackages::find()
            .filter(tour_packages::Column::Name.eq(name))
            .one(self.conn)
            .await?;
        Ok(row.map(Self::map_model))
    }
}
