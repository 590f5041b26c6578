use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

use crate::entities::transport::{FareClass, TransportKind};
use crate::entities::{airplane, bus, transport};
use crate::error::AppResult;

/// Inserts the parent row and the matching kind child row. Callers run this
/// inside a transaction so the pair lands atomically.
pub async fn insert<C>(
    conn: &C,
    fare_class: FareClass,
    kind: TransportKind,
) -> AppResult<transport::Model>
where
    C: ConnectionTrait,
{
    let saved = transport::ActiveModel {
        fare_class: Set(fare_class),
        kind: Set(kind),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    match kind {
        TransportKind::Bus => {
            bus::Entity::insert(bus::ActiveModel { id: Set(saved.id) })
                .exec(conn)
                .await?;
        }
        TransportKind::Airplane => {
            airplane::Entity::insert(airplane::ActiveModel { id: Set(saved.id) })
                .exec(conn)
                .await?;
        }
    }

    Ok(saved)
}

pub async fn find_by_id<C>(conn: &C, id: i64) -> AppResult<Option<transport::Model>>
where
    C: ConnectionTrait,
{
    Ok(transport::Entity::find_by_id(id).one(conn).await?)
}

pub async fn find_all_buses<C>(conn: &C) -> AppResult<Vec<transport::Model>>
where
    C: ConnectionTrait,
{
    let found = transport::Entity::find()
        .inner_join(bus::Entity)
        .all(conn)
        .await?;

    Ok(found)
}

pub async fn find_all_airplanes<C>(conn: &C) -> AppResult<Vec<transport::Model>>
where
    C: ConnectionTrait,
{
    let found = transport::Entity::find()
        .inner_join(airplane::Entity)
        .all(conn)
        .await?;

    Ok(found)
}

pub async fn find_all_buses_by_class<C>(
    conn: &C,
    fare_class: FareClass,
) -> AppResult<Vec<transport::Model>>
where
    C: ConnectionTrait,
{
    let found = transport::Entity::find()
        .inner_join(bus::Entity)
        .filter(transport::Column::FareClass.eq(fare_class))
        .all(conn)
        .await?;

    Ok(found)
}

pub async fn find_all_airplanes_by_class<C>(
    conn: &C,
    fare_class: FareClass,
) -> AppResult<Vec<transport::Model>>
where
    C: ConnectionTrait,
{
    let found = transport::Entity::find()
        .inner_join(airplane::Entity)
        .filter(transport::Column::FareClass.eq(fare_class))
        .all(conn)
        .await?;

    Ok(found)
}

pub async fn update_class<C>(conn: &C, id: i64, fare_class: FareClass) -> AppResult<u64>
where
    C: ConnectionTrait,
{
    let result = transport::Entity::update_many()
        .col_expr(transport::Column::FareClass, Expr::value(fare_class))
        .filter(transport::Column::Id.eq(id))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}

/// Child rows cascade from the parent delete.
pub async fn delete_by_id<C>(conn: &C, id: i64) -> AppResult<u64>
where
    C: ConnectionTrait,
{
    let result = transport::Entity::delete_by_id(id).exec(conn).await?;

    Ok(result.rows_affected)
}
