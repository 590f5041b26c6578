use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Deserialize;

use crate::domain::{DateRange, DepartureDestination};
use crate::entities::traveling_data;
use crate::error::{AppError, AppResult};
use crate::pricing;
use crate::repository::traveling_data as traveling_data_repo;
use crate::repository::traveling_points as point_repo;
use crate::repository::transports as transport_repo;
use crate::validation;

#[derive(Debug, Deserialize)]
pub struct NewTravelingData {
    pub departure_point_id: i64,
    pub destination_point_id: i64,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub transport_id: i64,
    pub available_tickets_count: i32,
}

/// Creates an offering. The price is never taken from the client; it is
/// derived from the transport and the route inside the same transaction that
/// persists the row.
pub async fn save(
    db: &DatabaseConnection,
    data: NewTravelingData,
) -> AppResult<traveling_data::Model> {
    validation::validate_tickets_count(data.available_tickets_count)?;

    let txn = db.begin().await?;

    let transport = transport_repo::find_by_id(&txn, data.transport_id)
        .await?
        .ok_or_else(|| AppError::NonExistentItem("This transport does not exist".to_string()))?;

    let departure = point_repo::find_by_id(&txn, data.departure_point_id)
        .await?
        .ok_or_else(|| {
            AppError::NonExistentItem("Departure traveling point does not exist".to_string())
        })?;
    let destination = point_repo::find_by_id(&txn, data.destination_point_id)
        .await?
        .ok_or_else(|| {
            AppError::NonExistentItem("Destination traveling point does not exist".to_string())
        })?;

    let route = DepartureDestination::new(departure, destination)?;
    let dates = DateRange::new(data.from_date, data.to_date)?;

    let price = pricing::offering_price(
        transport.fare_class,
        transport.kind,
        &route.departure_point,
        &route.destination_point,
    )?;

    let saved = traveling_data_repo::insert(
        &txn,
        traveling_data_repo::NewTravelingData {
            departure_point_id: route.departure_point.id,
            destination_point_id: route.destination_point.id,
            from_date: dates.from_date,
            to_date: dates.to_date,
            transport_id: transport.id,
            available_tickets_count: data.available_tickets_count,
            price,
        },
    )
    .await?;

    txn.commit().await?;
    tracing::info!(traveling_data_id = saved.id, price = saved.price, "created traveling data");

    Ok(saved)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> AppResult<traveling_data::Model> {
    validation::validate_id(id)?;

    traveling_data_repo::find_by_id(db, id)
        .await?
        .ok_or_else(|| AppError::NonExistentItem("This traveling data does not exist".to_string()))
}

pub async fn find_by_dates(
    db: &DatabaseConnection,
    from_date: NaiveDate,
    to_date: NaiveDate,
) -> AppResult<Vec<traveling_data::Model>> {
    validation::validate_dates(from_date, to_date)?;

    let found = traveling_data_repo::find_by_dates(db, from_date, to_date).await?;

    if found.is_empty() {
        return Err(AppError::NonExistentItem(
            "There are no booking data for these days".to_string(),
        ));
    }
    Ok(found)
}

pub async fn find_all(db: &DatabaseConnection) -> AppResult<Vec<traveling_data::Model>> {
    let found = traveling_data_repo::find_all(db).await?;

    if found.is_empty() {
        return Err(AppError::NonExistentItem(
            "No traveling data found".to_string(),
        ));
    }
    Ok(found)
}

pub async fn update_dates(
    db: &DatabaseConnection,
    id: i64,
    from_date: NaiveDate,
    to_date: NaiveDate,
) -> AppResult<()> {
    validation::validate_id(id)?;
    validation::validate_dates(from_date, to_date)?;

    let txn = db.begin().await?;

    let current = traveling_data_repo::find_by_id(&txn, id)
        .await?
        .ok_or_else(|| {
            AppError::NonExistentItem("This traveling data does not exist".to_string())
        })?;

    if current.from_date == from_date && current.to_date == to_date {
        return Err(AppError::AlreadyExistingItem(
            "New dates can not be the same as the current".to_string(),
        ));
    }

    traveling_data_repo::update_dates(&txn, id, from_date, to_date).await?;

    txn.commit().await?;
    tracing::info!(traveling_data_id = id, "updated traveling data dates");

    Ok(())
}

pub async fn delete_by_id(db: &DatabaseConnection, id: i64) -> AppResult<()> {
    validation::validate_id(id)?;

    let deleted = traveling_data_repo::delete_by_id(db, id).await?;
    if deleted == 0 {
        return Err(AppError::NonExistentItem(
            "Traveling data with this id does not exist".to_string(),
        ));
    }

    tracing::info!(traveling_data_id = id, "deleted traveling data");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::transport::{FareClass, TransportKind};
    use crate::entities::{transport, traveling_point};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn skopje() -> traveling_point::Model {
        traveling_point::Model {
            id: 1,
            name: "Skopje".to_string(),
            longitude: 21.43,
            latitude: 42.00,
        }
    }

    fn paris() -> traveling_point::Model {
        traveling_point::Model {
            id: 2,
            name: "Paris".to_string(),
            longitude: 2.35,
            latitude: 48.86,
        }
    }

    fn bus(id: i64) -> transport::Model {
        transport::Model {
            id,
            fare_class: FareClass::First,
            kind: TransportKind::Bus,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request() -> NewTravelingData {
        NewTravelingData {
            departure_point_id: 1,
            destination_point_id: 2,
            from_date: date(2030, 1, 1),
            to_date: date(2030, 1, 2),
            transport_id: 3,
            available_tickets_count: 20,
        }
    }

    #[tokio::test]
    async fn save_derives_the_price_from_the_route() {
        let expected_price =
            pricing::offering_price(FareClass::First, TransportKind::Bus, &skopje(), &paris())
                .unwrap();

        let inserted = traveling_data::Model {
            id: 9,
            departure_point_id: 1,
            destination_point_id: 2,
            from_date: date(2030, 1, 1),
            to_date: date(2030, 1, 2),
            transport_id: 3,
            available_tickets_count: 20,
            price: expected_price,
        };

        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([vec![bus(3)]])
            .append_query_results([vec![skopje()]])
            .append_query_results([vec![paris()]])
            .append_exec_results([MockExecResult {
                last_insert_id: 9,
                rows_affected: 1,
            }])
            .append_query_results([vec![inserted.clone()]])
            .into_connection();

        let saved = save(&db, request()).await.unwrap();
        assert_eq!(saved.price, expected_price);
        assert_eq!(saved.available_tickets_count, 20);
    }

    #[tokio::test]
    async fn save_rejects_equal_departure_and_destination() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([vec![bus(3)]])
            .append_query_results([vec![skopje()]])
            .append_query_results([vec![skopje()]])
            .into_connection();

        let mut req = request();
        req.destination_point_id = 1;

        let err = save(&db, req).await.unwrap_err();
        assert!(matches!(err, AppError::FailedInitialization(_)));
        assert_eq!(
            err.to_string(),
            "Departure point can not be the same as destination point"
        );
    }

    #[tokio::test]
    async fn save_rejects_missing_transport() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([Vec::<transport::Model>::new()])
            .into_connection();

        let err = save(&db, request()).await.unwrap_err();
        assert!(matches!(err, AppError::NonExistentItem(_)));
        assert_eq!(err.to_string(), "This transport does not exist");
    }

    #[tokio::test]
    async fn save_rejects_non_positive_tickets_before_touching_the_database() {
        let db = MockDatabase::new(DatabaseBackend::MySql).into_connection();

        let mut req = request();
        req.available_tickets_count = 0;

        let err = save(&db, req).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "Invalid tickets count");
    }
}
