use sea_orm::entity::prelude::*;

/// One customer's rating of one tour. `(tour_id, customer_id)` carries a
/// unique index created by the initial migration.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tour_ratings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tour_id: i32,
    pub customer_id: i32,
    pub score: i32,
    pub comment: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tours::Entity",
        from = "Column::TourId",
        to = "super::tours::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Tour,
}

impl Related<super::tours::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tour.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
