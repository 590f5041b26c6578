use sea_orm_migration::prelude::*;

use super::m20260210_000002_create_traveling_points::TravelingPoint;
use super::m20260210_000003_create_transports::Transport;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TravelingData::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TravelingData::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TravelingData::DeparturePointId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TravelingData::DestinationPointId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TravelingData::FromDate).date().not_null())
                    .col(ColumnDef::new(TravelingData::ToDate).date().not_null())
                    .col(
                        ColumnDef::new(TravelingData::TransportId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TravelingData::AvailableTicketsCount)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TravelingData::Price).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_traveling_data_departure_point")
                            .from(TravelingData::Table, TravelingData::DeparturePointId)
                            .to(TravelingPoint::Table, TravelingPoint::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_traveling_data_destination_point")
                            .from(TravelingData::Table, TravelingData::DestinationPointId)
                            .to(TravelingPoint::Table, TravelingPoint::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_traveling_data_transport")
                            .from(TravelingData::Table, TravelingData::TransportId)
                            .to(Transport::Table, Transport::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TravelingData::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TravelingData {
    Table,
    Id,
    DeparturePointId,
    DestinationPointId,
    FromDate,
    ToDate,
    TransportId,
    AvailableTicketsCount,
    Price,
}
