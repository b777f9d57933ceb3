use crate::entities::{prelude::*, tour_packages};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

pub const STANDARD_PACKAGES: [(&str, &str); 9] = [
    ("BC", "Backpack Cal"),
    ("CC", "California Calm"),
    ("CH", "California Hot springs"),
    ("CY", "Cycle California"),
    ("DS", "From Desert to Sea"),
    ("KC", "Kids California"),
    ("NW", "Nature Watch"),
    ("SC", "Snowboard Cali"),
    ("TC", "Taste of California"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert
            .into_table(TourPackages)
            .columns([tour_packages::Column::Code, tour_packages::Column::Name]);

        for (code, name) in STANDARD_PACKAGES {
            insert.values_panic([code.into(), name.into()]);
        }

        insert.on_conflict(
            OnConflict::column(tour_packages::Column::Code)
                .do_nothing()
                .to_owned(),
        );

        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let codes = STANDARD_PACKAGES.map(|(code, _)| code);
        let delete = Query::delete()
            .from_table(TourPackages)
            .and_where(Expr::col(tour_packages::Column::Code).is_in(codes))
            .to_owned();

        manager.exec_stmt(delete).await?;

        Ok(())
    }
}
