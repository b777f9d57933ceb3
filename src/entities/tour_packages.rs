use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tour_packages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub code: String,

    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tours::Entity")]
    Tours,
}

impl Related<super::tours::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tours.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
