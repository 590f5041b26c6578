use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Deserialize;

use crate::entities::transport::{self, TransportKind};
use crate::error::{AppError, AppResult};
use crate::repository::transports as transport_repo;
use crate::validation;

#[derive(Debug, Deserialize)]
pub struct NewTransport {
    pub kind: String,
    pub fare_class: String,
}

pub async fn save_bus(db: &DatabaseConnection, fare_class: &str) -> AppResult<transport::Model> {
    save(db, TransportKind::Bus, fare_class).await
}

pub async fn save_airplane(
    db: &DatabaseConnection,
    fare_class: &str,
) -> AppResult<transport::Model> {
    save(db, TransportKind::Airplane, fare_class).await
}

pub async fn save_all(
    db: &DatabaseConnection,
    transports: Vec<NewTransport>,
) -> AppResult<Vec<transport::Model>> {
    if transports.is_empty() {
        return Err(AppError::InvalidArgument(
            "Invalid transport list".to_string(),
        ));
    }

    let txn = db.begin().await?;

    let mut saved = Vec::with_capacity(transports.len());
    for new_transport in transports {
        let kind = parse_kind(&new_transport.kind)?;
        let fare_class = validation::parse_fare_class(&new_transport.fare_class)?;
        saved.push(transport_repo::insert(&txn, fare_class, kind).await?);
    }

    txn.commit().await?;
    tracing::info!(count = saved.len(), "created transports");

    Ok(saved)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> AppResult<transport::Model> {
    validation::validate_id(id)?;

    transport_repo::find_by_id(db, id).await?.ok_or_else(|| {
        AppError::NonExistentItem("Transport with that id does not exist".to_string())
    })
}

pub async fn find_all_buses(db: &DatabaseConnection) -> AppResult<Vec<transport::Model>> {
    require_some(transport_repo::find_all_buses(db).await?)
}

pub async fn find_all_airplanes(db: &DatabaseConnection) -> AppResult<Vec<transport::Model>> {
    require_some(transport_repo::find_all_airplanes(db).await?)
}

pub async fn find_all_buses_by_class(
    db: &DatabaseConnection,
    fare_class: &str,
) -> AppResult<Vec<transport::Model>> {
    let fare_class = validation::parse_fare_class(fare_class)?;

    require_some(transport_repo::find_all_buses_by_class(db, fare_class).await?)
}

pub async fn find_all_airplanes_by_class(
    db: &DatabaseConnection,
    fare_class: &str,
) -> AppResult<Vec<transport::Model>> {
    let fare_class = validation::parse_fare_class(fare_class)?;

    require_some(transport_repo::find_all_airplanes_by_class(db, fare_class).await?)
}

pub async fn update_class(db: &DatabaseConnection, id: i64, fare_class: &str) -> AppResult<()> {
    validation::validate_id(id)?;
    let fare_class = validation::parse_fare_class(fare_class)?;

    let updated = transport_repo::update_class(db, id, fare_class).await?;
    if updated == 0 {
        return Err(AppError::NonExistentItem(
            "Transport with that id does not exist".to_string(),
        ));
    }

    tracing::info!(transport_id = id, "updated transport class");
    Ok(())
}

pub async fn delete_by_id(db: &DatabaseConnection, id: i64) -> AppResult<()> {
    validation::validate_id(id)?;

    let deleted = transport_repo::delete_by_id(db, id).await?;
    if deleted == 0 {
        return Err(AppError::NonExistentItem(
            "Transport with that id does not exist".to_string(),
        ));
    }

    tracing::info!(transport_id = id, "deleted transport");
    Ok(())
}

async fn save(
    db: &DatabaseConnection,
    kind: TransportKind,
    fare_class: &str,
) -> AppResult<transport::Model> {
    let fare_class = validation::parse_fare_class(fare_class)?;

    let txn = db.begin().await?;
    let saved = transport_repo::insert(&txn, fare_class, kind).await?;
    txn.commit().await?;

    tracing::info!(transport_id = saved.id, ?kind, "created transport");
    Ok(saved)
}

fn parse_kind(value: &str) -> AppResult<TransportKind> {
    match value {
        "bus" => Ok(TransportKind::Bus),
        "airplane" => Ok(TransportKind::Airplane),
        _ => Err(AppError::InvalidArgument(
            "Invalid transport kind".to_string(),
        )),
    }
}

fn require_some(transports: Vec<transport::Model>) -> AppResult<Vec<transport::Model>> {
    if transports.is_empty() {
        return Err(AppError::NonExistentItem(
            "List of transports is not found".to_string(),
        ));
    }
    Ok(transports)
}
