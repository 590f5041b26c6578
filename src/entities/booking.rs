use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "booking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub traveling_data_id: i64,
    pub reserved_tickets_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::traveling_data::Entity",
        from = "Column::TravelingDataId",
        to = "super::traveling_data::Column::Id"
    )]
    TravelingData,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::traveling_data::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TravelingData.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
