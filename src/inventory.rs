//! Seat-inventory core.
//!
//! Every change to an offering's `available_tickets_count` goes through this
//! module, inside the caller's transaction. `reserve` is a conditional
//! decrement: the `WHERE available_tickets_count >= n` guard makes the
//! check-and-subtract a single atomic statement, so two concurrent bookings
//! can never both succeed on the same remaining seats.

use sea_orm::{ConnectionTrait, EntityTrait, Statement};

use crate::entities::traveling_data;
use crate::error::{AppError, AppResult};

/// Takes `tickets` seats from an offering, failing without effect when fewer
/// seats are available.
pub async fn reserve<C>(conn: &C, traveling_data_id: i64, tickets: i32) -> AppResult<()>
where
    C: ConnectionTrait,
{
    if tickets <= 0 {
        return Err(AppError::InvalidArgument(
            "Invalid tickets count".to_string(),
        ));
    }

    let result = conn
        .execute(Statement::from_sql_and_values(
            conn.get_database_backend(),
            "UPDATE traveling_data \
             SET available_tickets_count = available_tickets_count - ? \
             WHERE id = ? AND available_tickets_count >= ?",
            [tickets.into(), traveling_data_id.into(), tickets.into()],
        ))
        .await?;

    if result.rows_affected() == 0 {
        // Zero rows means either a missing offering or not enough seats.
        let offering = traveling_data::Entity::find_by_id(traveling_data_id)
            .one(conn)
            .await?;

        return match offering {
            Some(_) => Err(AppError::InvalidArgument(
                "Unavailable tickets count".to_string(),
            )),
            None => Err(AppError::NonExistentItem(
                "This traveling data does not exist".to_string(),
            )),
        };
    }

    tracing::info!(traveling_data_id, tickets, "reserved tickets");
    Ok(())
}

/// Returns `tickets` seats to an offering. The caller only ever releases what
/// a live booking holds, which keeps the count below the initial capacity.
pub async fn release<C>(conn: &C, traveling_data_id: i64, tickets: i32) -> AppResult<()>
where
    C: ConnectionTrait,
{
    if tickets <= 0 {
        return Err(AppError::InvalidArgument(
            "Invalid tickets count".to_string(),
        ));
    }

    let result = conn
        .execute(Statement::from_sql_and_values(
            conn.get_database_backend(),
            "UPDATE traveling_data \
             SET available_tickets_count = available_tickets_count + ? \
             WHERE id = ?",
            [tickets.into(), traveling_data_id.into()],
        ))
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NonExistentItem(
            "This traveling data does not exist".to_string(),
        ));
    }

    tracing::info!(traveling_data_id, tickets, "released tickets");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
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

    #[tokio::test]
    async fn reserve_succeeds_when_rows_are_affected() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        assert!(reserve(&db, 1, 5).await.is_ok());
    }

    #[tokio::test]
    async fn reserve_on_existing_offering_with_too_few_seats_is_invalid() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .append_query_results([vec![offering(1, 3)]])
            .into_connection();

        let err = reserve(&db, 1, 7).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "Unavailable tickets count");
    }

    #[tokio::test]
    async fn reserve_on_missing_offering_is_non_existent() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .append_query_results([Vec::<traveling_data::Model>::new()])
            .into_connection();

        let err = reserve(&db, 42, 1).await.unwrap_err();
        assert!(matches!(err, AppError::NonExistentItem(_)));
    }

    #[tokio::test]
    async fn reserve_rejects_non_positive_counts_before_touching_the_database() {
        let db = MockDatabase::new(DatabaseBackend::MySql).into_connection();

        assert!(reserve(&db, 1, 0).await.is_err());
        assert!(reserve(&db, 1, -2).await.is_err());
    }

    #[tokio::test]
    async fn release_succeeds_on_existing_offering() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        assert!(release(&db, 1, 4).await.is_ok());
    }

    #[tokio::test]
    async fn release_on_missing_offering_is_non_existent() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let err = release(&db, 42, 4).await.unwrap_err();
        assert!(matches!(err, AppError::NonExistentItem(_)));
    }
}
