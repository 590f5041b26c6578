use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Fare class of a transport; each class carries a fixed pricing coefficient.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(12))")]
#[serde(rename_all = "UPPERCASE")]
pub enum FareClass {
    #[sea_orm(string_value = "FIRST")]
    First,
    #[sea_orm(string_value = "BUSINESS")]
    Business,
    #[sea_orm(string_value = "ECONOMY")]
    Economy,
}

/// Discriminator of the joined-inheritance scheme: the parent row carries the
/// kind, the matching child table (`bus` / `airplane`) carries the same id.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(12))")]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    #[sea_orm(string_value = "bus")]
    Bus,
    #[sea_orm(string_value = "airplane")]
    Airplane,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transport")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub fare_class: FareClass,
    pub kind: TransportKind,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::bus::Entity")]
    Bus,
    #[sea_orm(has_one = "super::airplane::Entity")]
    Airplane,
    #[sea_orm(has_many = "super::traveling_data::Entity")]
    TravelingData,
}

impl Related<super::bus::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bus.def()
    }
}

impl Related<super::airplane::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Airplane.def()
    }
}

impl Related<super::traveling_data::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TravelingData.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
