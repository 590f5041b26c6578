use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

use crate::entities::{booking, user};
use crate::error::AppResult;

pub async fn insert<C>(
    conn: &C,
    user_id: i64,
    traveling_data_id: i64,
    reserved_tickets_count: i32,
) -> AppResult<booking::Model>
where
    C: ConnectionTrait,
{
    let saved = booking::ActiveModel {
        user_id: Set(user_id),
        traveling_data_id: Set(traveling_data_id),
        reserved_tickets_count: Set(reserved_tickets_count),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    Ok(saved)
}

pub async fn find_by_id<C>(conn: &C, id: i64) -> AppResult<Option<booking::Model>>
where
    C: ConnectionTrait,
{
    Ok(booking::Entity::find_by_id(id).one(conn).await?)
}

pub async fn find_all_by_username<C>(conn: &C, username: &str) -> AppResult<Vec<booking::Model>>
where
    C: ConnectionTrait,
{
    let found = booking::Entity::find()
        .inner_join(user::Entity)
        .filter(user::Column::Username.eq(username))
        .all(conn)
        .await?;

    Ok(found)
}

pub async fn find_all<C>(conn: &C) -> AppResult<Vec<booking::Model>>
where
    C: ConnectionTrait,
{
    Ok(booking::Entity::find().all(conn).await?)
}

pub async fn update_tickets<C>(conn: &C, id: i64, reserved_tickets_count: i32) -> AppResult<u64>
where
    C: ConnectionTrait,
{
    let result = booking::Entity::update_many()
        .col_expr(
            booking::Column::ReservedTicketsCount,
            Expr::value(reserved_tickets_count),
        )
        .filter(booking::Column::Id.eq(id))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}

pub async fn delete_by_id<C>(conn: &C, id: i64) -> AppResult<u64>
where
    C: ConnectionTrait,
{
    let result = booking::Entity::delete_by_id(id).exec(conn).await?;

    Ok(result.rows_affected)
}
