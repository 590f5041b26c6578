use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

use crate::entities::traveling_point;
use crate::error::AppResult;

pub async fn insert<C>(
    conn: &C,
    name: String,
    longitude: f64,
    latitude: f64,
) -> AppResult<traveling_point::Model>
where
    C: ConnectionTrait,
{
    let saved = traveling_point::ActiveModel {
        name: Set(name),
        longitude: Set(longitude),
        latitude: Set(latitude),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    Ok(saved)
}

pub async fn find_by_id<C>(conn: &C, id: i64) -> AppResult<Option<traveling_point::Model>>
where
    C: ConnectionTrait,
{
    Ok(traveling_point::Entity::find_by_id(id).one(conn).await?)
}

pub async fn find_by_name<C>(conn: &C, name: &str) -> AppResult<Option<traveling_point::Model>>
where
    C: ConnectionTrait,
{
    let found = traveling_point::Entity::find()
        .filter(traveling_point::Column::Name.eq(name))
        .one(conn)
        .await?;

    Ok(found)
}

pub async fn find_all<C>(conn: &C) -> AppResult<Vec<traveling_point::Model>>
where
    C: ConnectionTrait,
{
    Ok(traveling_point::Entity::find().all(conn).await?)
}

pub async fn update_name<C>(conn: &C, new_name: &str, old_name: &str) -> AppResult<u64>
where
    C: ConnectionTrait,
{
    let result = traveling_point::Entity::update_many()
        .col_expr(traveling_point::Column::Name, Expr::value(new_name))
        .filter(traveling_point::Column::Name.eq(old_name))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}

pub async fn delete_by_id<C>(conn: &C, id: i64) -> AppResult<u64>
where
    C: ConnectionTrait,
{
    let result = traveling_point::Entity::delete_by_id(id).exec(conn).await?;

    Ok(result.rows_affected)
}
