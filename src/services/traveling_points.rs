use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use serde::Deserialize;

use crate::entities::traveling_point;
use crate::error::{AppError, AppResult};
use crate::repository::traveling_points as point_repo;
use crate::validation;

#[derive(Debug, Deserialize)]
pub struct NewTravelingPoint {
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
}

pub async fn save(
    db: &DatabaseConnection,
    point: NewTravelingPoint,
) -> AppResult<traveling_point::Model> {
    let txn = db.begin().await?;

    let saved = insert_point(&txn, point).await?;

    txn.commit().await?;
    tracing::info!(point_id = saved.id, "created traveling point");

    Ok(saved)
}

pub async fn save_all(
    db: &DatabaseConnection,
    points: Vec<NewTravelingPoint>,
) -> AppResult<Vec<traveling_point::Model>> {
    if points.is_empty() {
        return Err(AppError::InvalidArgument(
            "Invalid list of traveling points".to_string(),
        ));
    }

    let txn = db.begin().await?;

    let mut saved = Vec::with_capacity(points.len());
    for point in points {
        saved.push(insert_point(&txn, point).await?);
    }

    txn.commit().await?;
    tracing::info!(count = saved.len(), "created traveling points");

    Ok(saved)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> AppResult<traveling_point::Model> {
    validation::validate_id(id)?;

    point_repo::find_by_id(db, id).await?.ok_or_else(|| {
        AppError::NonExistentItem("Traveling point with this id does not exist".to_string())
    })
}

pub async fn find_by_name(db: &DatabaseConnection, name: &str) -> AppResult<traveling_point::Model> {
    if name.is_empty() {
        return Err(AppError::InvalidArgument("Invalid name".to_string()));
    }

    point_repo::find_by_name(db, name).await?.ok_or_else(|| {
        AppError::NonExistentItem("Traveling point with this name does not exist".to_string())
    })
}

pub async fn find_all(db: &DatabaseConnection) -> AppResult<Vec<traveling_point::Model>> {
    let points = point_repo::find_all(db).await?;

    if points.is_empty() {
        return Err(AppError::NonExistentItem(
            "There are no traveling points found".to_string(),
        ));
    }
    Ok(points)
}

pub async fn update_name(db: &DatabaseConnection, new_name: &str, old_name: &str) -> AppResult<()> {
    if new_name.is_empty() {
        return Err(AppError::InvalidArgument("Invalid new name".to_string()));
    }
    if old_name.is_empty() {
        return Err(AppError::InvalidArgument("Invalid old name".to_string()));
    }
    if new_name == old_name {
        return Err(AppError::AlreadyExistingItem(
            "Traveling point with given new name already exists".to_string(),
        ));
    }
    validation::validate_point_name(new_name)?;

    let txn = db.begin().await?;

    if point_repo::find_by_name(&txn, new_name).await?.is_some() {
        return Err(AppError::AlreadyExistingItem(
            "Traveling point already exists".to_string(),
        ));
    }

    let updated = point_repo::update_name(&txn, new_name, old_name).await?;
    if updated == 0 {
        return Err(AppError::NonExistentItem(
            "Traveling point with this name does not exist".to_string(),
        ));
    }

    txn.commit().await?;
    tracing::info!(old_name, new_name, "renamed traveling point");

    Ok(())
}

pub async fn delete_by_id(db: &DatabaseConnection, id: i64) -> AppResult<()> {
    validation::validate_id(id)?;

    let deleted = point_repo::delete_by_id(db, id).await?;
    if deleted == 0 {
        return Err(AppError::NonExistentItem(
            "Traveling point with this id does not exist".to_string(),
        ));
    }

    tracing::info!(point_id = id, "deleted traveling point");
    Ok(())
}

async fn insert_point<C>(conn: &C, point: NewTravelingPoint) -> AppResult<traveling_point::Model>
where
    C: ConnectionTrait,
{
    validation::validate_point_name(&point.name)?;
    validation::validate_coordinates(point.longitude, point.latitude)?;

    if point_repo::find_by_name(conn, &point.name).await?.is_some() {
        return Err(AppError::AlreadyExistingItem(
            "Traveling point already exists".to_string(),
        ));
    }

    point_repo::insert(conn, point.name, point.longitude, point.latitude).await
}
