use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transport::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Transport::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Transport::FareClass)
                            .string_len(12)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Transport::Kind).string_len(12).not_null())
                    .to_owned(),
            )
            .await?;

        // Joined inheritance: one id-only child table per transport kind.
        manager
            .create_table(
                Table::create()
                    .table(Bus::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bus::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bus_transport")
                            .from(Bus::Table, Bus::Id)
                            .to(Transport::Table, Transport::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Airplane::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Airplane::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_airplane_transport")
                            .from(Airplane::Table, Airplane::Id)
                            .to(Transport::Table, Transport::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Airplane::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Bus::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Transport::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Transport {
    Table,
    Id,
    FareClass,
    Kind,
}

#[derive(DeriveIden)]
pub enum Bus {
    Table,
    Id,
}

#[derive(DeriveIden)]
pub enum Airplane {
    Table,
    Id,
}
