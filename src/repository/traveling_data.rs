use chrono::NaiveDate;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

use crate::entities::traveling_data;
use crate::error::AppResult;

pub struct NewTravelingData {
    pub departure_point_id: i64,
    pub destination_point_id: i64,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub transport_id: i64,
    pub available_tickets_count: i32,
    pub price: f64,
}

pub async fn insert<C>(conn: &C, data: NewTravelingData) -> AppResult<traveling_data::Model>
where
    C: ConnectionTrait,
{
    let saved = traveling_data::ActiveModel {
        departure_point_id: Set(data.departure_point_id),
        destination_point_id: Set(data.destination_point_id),
        from_date: Set(data.from_date),
        to_date: Set(data.to_date),
        transport_id: Set(data.transport_id),
        available_tickets_count: Set(data.available_tickets_count),
        price: Set(data.price),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    Ok(saved)
}

pub async fn find_by_id<C>(conn: &C, id: i64) -> AppResult<Option<traveling_data::Model>>
where
    C: ConnectionTrait,
{
    Ok(traveling_data::Entity::find_by_id(id).one(conn).await?)
}

pub async fn find_by_dates<C>(
    conn: &C,
    from_date: NaiveDate,
    to_date: NaiveDate,
) -> AppResult<Vec<traveling_data::Model>>
where
    C: ConnectionTrait,
{
    let found = traveling_data::Entity::find()
        .filter(traveling_data::Column::FromDate.eq(from_date))
        .filter(traveling_data::Column::ToDate.eq(to_date))
        .all(conn)
        .await?;

    Ok(found)
}

pub async fn find_all<C>(conn: &C) -> AppResult<Vec<traveling_data::Model>>
where
    C: ConnectionTrait,
{
    Ok(traveling_data::Entity::find().all(conn).await?)
}

pub async fn update_dates<C>(
    conn: &C,
    id: i64,
    from_date: NaiveDate,
    to_date: NaiveDate,
) -> AppResult<u64>
where
    C: ConnectionTrait,
{
    let result = traveling_data::Entity::update_many()
        .col_expr(traveling_data::Column::FromDate, Expr::value(from_date))
        .col_expr(traveling_data::Column::ToDate, Expr::value(to_date))
        .filter(traveling_data::Column::Id.eq(id))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}

pub async fn delete_by_id<C>(conn: &C, id: i64) -> AppResult<u64>
where
    C: ConnectionTrait,
{
    let result = traveling_data::Entity::delete_by_id(id).exec(conn).await?;

    Ok(result.rows_affected)
}
