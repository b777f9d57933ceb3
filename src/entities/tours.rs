use crate::domain::{Difficulty, Region};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tours")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub blurb: String,
    pub price: i32,
    pub duration: String,
    #[sea_orm(column_type = "Text")]
    pub bullets: String,
    pub keywords: String,
    pub tour_package_code: String,
    pub difficulty: Difficulty,
    pub region: Region,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tour_packages::Entity",
        from = "Column::TourPackageCode",
        to = "super::tour_packages::Column::Code",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    TourPackage,

    #[sea_orm(has_many = "super::tour_ratings::Entity")]
    TourRatings,
}

impl Related<super::tour_packages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TourPackage.def()
    }
}

impl Related<super::tour_ratings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TourRatings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
