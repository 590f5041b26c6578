use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TravelingPoint::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TravelingPoint::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TravelingPoint::Name)
                            .string_len(64)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(TravelingPoint::Longitude).double().not_null())
                    .col(ColumnDef::new(TravelingPoint::Latitude).double().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TravelingPoint::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TravelingPoint {
    Table,
    Id,
    Name,
    Longitude,
    Latitude,
}
