use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "traveling_data")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub departure_point_id: i64,
    pub destination_point_id: i64,
    pub from_date: Date,
    pub to_date: Date,
    pub transport_id: i64,
    pub available_tickets_count: i32,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::traveling_point::Entity",
        from = "Column::DeparturePointId",
        to = "super::traveling_point::Column::Id"
    )]
    DeparturePoint,
    #[sea_orm(
        belongs_to = "super::traveling_point::Entity",
        from = "Column::DestinationPointId",
        to = "super::traveling_point::Column::Id"
    )]
    DestinationPoint,
    #[sea_orm(
        belongs_to = "super::transport::Entity",
        from = "Column::TransportId",
        to = "super::transport::Column::Id"
    )]
    Transport,
    #[sea_orm(has_many = "super::booking::Entity")]
    Bookings,
}

impl Related<super::transport::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transport.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
