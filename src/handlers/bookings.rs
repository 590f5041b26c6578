use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::entities::booking;
use crate::error::AppResult;
use crate::services::bookings::{self as booking_service, NewBooking};
use crate::AppState;

pub async fn save(
    State(state): State<AppState>,
    Json(payload): Json<NewBooking>,
) -> AppResult<Json<booking::Model>> {
    let saved = booking_service::save(&state.db, payload).await?;

    Ok(Json(saved))
}

pub async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<booking::Model>> {
    let found = booking_service::find_by_id(&state.db, id).await?;

    Ok(Json(found))
}

pub async fn find_all_user_bookings(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<Vec<booking::Model>>> {
    let found = booking_service::find_all_user_bookings(&state.db, &username).await?;

    Ok(Json(found))
}

pub async fn find_all(State(state): State<AppState>) -> AppResult<Json<Vec<booking::Model>>> {
    let found = booking_service::find_all(&state.db).await?;

    Ok(Json(found))
}

pub async fn update_tickets(
    State(state): State<AppState>,
    Path((id, reserved_tickets_count)): Path<(i64, i32)>,
) -> AppResult<StatusCode> {
    booking_service::update_tickets(&state.db, id, reserved_tickets_count).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    booking_service::delete_by_id(&state.db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
