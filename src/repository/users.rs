use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

use crate::entities::user;
use crate::error::AppResult;

pub async fn insert<C>(
    conn: &C,
    username: String,
    email: String,
    password_hash: String,
) -> AppResult<user::Model>
where
    C: ConnectionTrait,
{
    let saved = user::ActiveModel {
        username: Set(username),
        email: Set(email),
        password_hash: Set(password_hash),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    Ok(saved)
}

pub async fn find_by_username<C>(conn: &C, username: &str) -> AppResult<Option<user::Model>>
where
    C: ConnectionTrait,
{
    let found = user::Entity::find()
        .filter(user::Column::Username.eq(username))
        .one(conn)
        .await?;

    Ok(found)
}

pub async fn find_by_email<C>(conn: &C, email: &str) -> AppResult<Option<user::Model>>
where
    C: ConnectionTrait,
{
    let found = user::Entity::find()
        .filter(user::Column::Email.eq(email))
        .one(conn)
        .await?;

    Ok(found)
}

pub async fn find_by_id<C>(conn: &C, id: i64) -> AppResult<Option<user::Model>>
where
    C: ConnectionTrait,
{
    Ok(user::Entity::find_by_id(id).one(conn).await?)
}

pub async fn find_all<C>(conn: &C) -> AppResult<Vec<user::Model>>
where
    C: ConnectionTrait,
{
    Ok(user::Entity::find().all(conn).await?)
}

pub async fn update_password<C>(conn: &C, username: &str, password_hash: String) -> AppResult<u64>
where
    C: ConnectionTrait,
{
    let result = user::Entity::update_many()
        .col_expr(user::Column::PasswordHash, Expr::value(password_hash))
        .filter(user::Column::Username.eq(username))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}

pub async fn update_email<C>(conn: &C, new_email: &str, old_email: &str) -> AppResult<u64>
where
    C: ConnectionTrait,
{
    let result = user::Entity::update_many()
        .col_expr(user::Column::Email, Expr::value(new_email))
        .filter(user::Column::Email.eq(old_email))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}

pub async fn delete_by_username<C>(conn: &C, username: &str) -> AppResult<u64>
where
    C: ConnectionTrait,
{
    let result = user::Entity::delete_many()
        .filter(user::Column::Username.eq(username))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}

pub async fn delete_by_email<C>(conn: &C, email: &str) -> AppResult<u64>
where
    C: ConnectionTrait,
{
    let result = user::Entity::delete_many()
        .filter(user::Column::Email.eq(email))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}
