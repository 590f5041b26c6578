pub use sea_orm_migration::prelude::*;

mod m20260210_000001_create_users;
mod m20260210_000002_create_traveling_points;
mod m20260210_000003_create_transports;
mod m20260210_000004_create_traveling_data;
mod m20260210_000005_create_bookings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260210_000001_create_users::Migration),
            Box::new(m20260210_000002_create_traveling_points::Migration),
            Box::new(m20260210_000003_create_transports::Migration),
            Box::new(m20260210_000004_create_traveling_data::Migration),
            Box::new(m20260210_000005_create_bookings::Migration),
        ]
    }
}
