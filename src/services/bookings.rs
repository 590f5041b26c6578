use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Deserialize;

use crate::entities::booking;
use crate::error::{AppError, AppResult};
use crate::inventory;
use crate::repository::bookings as booking_repo;
use crate::repository::traveling_data as traveling_data_repo;
use crate::repository::users as user_repo;
use crate::validation;

#[derive(Debug, Deserialize)]
pub struct NewBooking {
    pub user_id: i64,
    pub traveling_data_id: i64,
    pub reserved_tickets_count: i32,
}

/// Creates a booking: seats are taken from the offering and the booking row
/// is inserted inside one transaction, so a failed reservation leaves no
/// trace and a failed insert returns the seats.
pub async fn save(db: &DatabaseConnection, new_booking: NewBooking) -> AppResult<booking::Model> {
    validation::validate_id(new_booking.user_id)?;
    validation::validate_id(new_booking.traveling_data_id)?;
    validation::validate_tickets_count(new_booking.reserved_tickets_count)?;

    let txn = db.begin().await?;

    traveling_data_repo::find_by_id(&txn, new_booking.traveling_data_id)
        .await?
        .ok_or_else(|| AppError::NonExistentItem("Traveling data does not exist".to_string()))?;

    user_repo::find_by_id(&txn, new_booking.user_id)
        .await?
        .ok_or_else(|| AppError::NonExistentItem("User does not exist".to_string()))?;

    inventory::reserve(
        &txn,
        new_booking.traveling_data_id,
        new_booking.reserved_tickets_count,
    )
    .await?;

    let saved = booking_repo::insert(
        &txn,
        new_booking.user_id,
        new_booking.traveling_data_id,
        new_booking.reserved_tickets_count,
    )
    .await?;

    txn.commit().await?;
    tracing::info!(
        booking_id = saved.id,
        traveling_data_id = saved.traveling_data_id,
        tickets = saved.reserved_tickets_count,
        "created booking"
    );

    Ok(saved)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> AppResult<booking::Model> {
    validation::validate_id(id)?;

    booking_repo::find_by_id(db, id)
        .await?
        .ok_or_else(|| AppError::NonExistentItem("This booking does not exist".to_string()))
}

pub async fn find_all_user_bookings(
    db: &DatabaseConnection,
    username: &str,
) -> AppResult<Vec<booking::Model>> {
    validation::validate_username(username)?;

    user_repo::find_by_username(db, username)
        .await?
        .ok_or_else(|| AppError::NonExistentItem("User does not exist".to_string()))?;

    let bookings = booking_repo::find_all_by_username(db, username).await?;

    if bookings.is_empty() {
        return Err(AppError::NonExistentItem(
            "Bookings for this user are not found".to_string(),
        ));
    }
    Ok(bookings)
}

pub async fn find_all(db: &DatabaseConnection) -> AppResult<Vec<booking::Model>> {
    let bookings = booking_repo::find_all(db).await?;

    if bookings.is_empty() {
        return Err(AppError::NonExistentItem(
            "Bookings are not found".to_string(),
        ));
    }
    Ok(bookings)
}

/// Moves a booking to a new ticket count. The old seats are released first,
/// then the new count is reserved against the refreshed remainder; both
/// steps and the row update share one transaction.
pub async fn update_tickets(
    db: &DatabaseConnection,
    booking_id: i64,
    reserved_tickets_count: i32,
) -> AppResult<()> {
    validation::validate_id(booking_id)?;
    validation::validate_tickets_count(reserved_tickets_count)?;

    let txn = db.begin().await?;

    let current = booking_repo::find_by_id(&txn, booking_id)
        .await?
        .ok_or_else(|| AppError::NonExistentItem("This booking does not exist".to_string()))?;

    inventory::release(
        &txn,
        current.traveling_data_id,
        current.reserved_tickets_count,
    )
    .await?;
    inventory::reserve(&txn, current.traveling_data_id, reserved_tickets_count).await?;

    booking_repo::update_tickets(&txn, booking_id, reserved_tickets_count).await?;

    txn.commit().await?;
    tracing::info!(
        booking_id,
        tickets = reserved_tickets_count,
        "updated booking tickets"
    );

    Ok(())
}

/// Cancels a booking, returning its seats to the offering.
pub async fn delete_by_id(db: &DatabaseConnection, id: i64) -> AppResult<()> {
    validation::validate_id(id)?;

    let txn = db.begin().await?;

    let booking = booking_repo::find_by_id(&txn, id)
        .await?
        .ok_or_else(|| AppError::NonExistentItem("This booking does not exist".to_string()))?;

    inventory::release(&txn, booking.traveling_data_id, booking.reserved_tickets_count).await?;
    booking_repo::delete_by_id(&txn, id).await?;

    txn.commit().await?;
    tracing::info!(booking_id = id, "cancelled booking");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{traveling_data, user};
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn offering(id: i64, available: i32) -> traveling_data::Model {
        traveling_data::Model {
            id,
            departure_point_id: 1,
            destination_point_id: 2,
            from_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            to_date: NaiveDate::from_ymd_opt(2030, 1, 2).unwrap(),
            transport_id: 1,
            available_tickets_count: available,
            price: 75.0,
        }
    }

    fn traveller(id: i64) -> user::Model {
        user::Model {
            id,
            username: "anna_k".to_string(),
            email: "anna@example.com".to_string(),
            password_hash: "$2b$12$hash".to_string(),
        }
    }

    fn booking_row(id: i64, traveling_data_id: i64, tickets: i32) -> booking::Model {
        booking::Model {
            id,
            user_id: 4,
            traveling_data_id,
            reserved_tickets_count: tickets,
        }
    }

    fn exec_ok(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn save_reserves_seats_and_inserts_the_row() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([vec![offering(9, 20)]])
            .append_query_results([vec![traveller(4)]])
            .append_exec_results([
                exec_ok(1),
                MockExecResult {
                    last_insert_id: 7,
                    rows_affected: 1,
                },
            ])
            .append_query_results([vec![booking_row(7, 9, 15)]])
            .into_connection();

        let saved = save(
            &db,
            NewBooking {
                user_id: 4,
                traveling_data_id: 9,
                reserved_tickets_count: 15,
            },
        )
        .await
        .unwrap();

        assert_eq!(saved.id, 7);
        assert_eq!(saved.reserved_tickets_count, 15);
    }

    #[tokio::test]
    async fn save_fails_when_seats_run_out() {
        // The guarded decrement affects zero rows, the offering still exists:
        // the loser of the race gets "Unavailable tickets count".
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([vec![offering(9, 5)]])
            .append_query_results([vec![traveller(4)]])
            .append_exec_results([exec_ok(0)])
            .append_query_results([vec![offering(9, 5)]])
            .into_connection();

        let err = save(
            &db,
            NewBooking {
                user_id: 4,
                traveling_data_id: 9,
                reserved_tickets_count: 15,
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "Unavailable tickets count");
    }

    #[tokio::test]
    async fn save_fails_for_missing_offering() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([Vec::<traveling_data::Model>::new()])
            .into_connection();

        let err = save(
            &db,
            NewBooking {
                user_id: 4,
                traveling_data_id: 9,
                reserved_tickets_count: 2,
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::NonExistentItem(_)));
        assert_eq!(err.to_string(), "Traveling data does not exist");
    }

    #[tokio::test]
    async fn update_tickets_releases_then_reserves() {
        // Booking holds 5, offering has 3 left; releasing first makes 8
        // available, so moving to 7 succeeds.
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([vec![booking_row(7, 9, 5)]])
            .append_exec_results([exec_ok(1), exec_ok(1), exec_ok(1)])
            .into_connection();

        assert!(update_tickets(&db, 7, 7).await.is_ok());
    }

    #[tokio::test]
    async fn update_tickets_fails_when_new_count_exceeds_freed_seats() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([vec![booking_row(7, 9, 5)]])
            .append_exec_results([exec_ok(1), exec_ok(0)])
            .append_query_results([vec![offering(9, 8)]])
            .into_connection();

        let err = update_tickets(&db, 7, 50).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "Unavailable tickets count");
    }

    #[tokio::test]
    async fn delete_releases_the_booked_seats() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([vec![booking_row(7, 9, 4)]])
            .append_exec_results([exec_ok(1), exec_ok(1)])
            .into_connection();

        assert!(delete_by_id(&db, 7).await.is_ok());
    }

    #[tokio::test]
    async fn delete_of_missing_booking_is_non_existent() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([Vec::<booking::Model>::new()])
            .into_connection();

        let err = delete_by_id(&db, 7).await.unwrap_err();
        assert!(matches!(err, AppError::NonExistentItem(_)));
    }
}
