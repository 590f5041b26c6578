use sea_orm_migration::prelude::*;

use super::m20260210_000001_create_users::User;
use super::m20260210_000004_create_traveling_data::TravelingData;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Booking::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Booking::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Booking::TravelingDataId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Booking::ReservedTicketsCount)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_traveling_data")
                            .from(Booking::Table, Booking::TravelingDataId)
                            .to(TravelingData::Table, TravelingData::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    UserId,
    TravelingDataId,
    ReservedTicketsCount,
}
