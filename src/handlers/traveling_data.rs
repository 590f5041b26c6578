use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::entities::traveling_data;
use crate::error::AppResult;
use crate::services::traveling_data::{self as traveling_data_service, NewTravelingData};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct DateRangeRequest {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

pub async fn save(
    State(state): State<AppState>,
    Json(payload): Json<NewTravelingData>,
) -> AppResult<Json<traveling_data::Model>> {
    let saved = traveling_data_service::save(&state.db, payload).await?;

    Ok(Json(saved))
}

pub async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<traveling_data::Model>> {
    let found = traveling_data_service::find_by_id(&state.db, id).await?;

    Ok(Json(found))
}

pub async fn find_by_dates(
    State(state): State<AppState>,
    Json(payload): Json<DateRangeRequest>,
) -> AppResult<Json<Vec<traveling_data::Model>>> {
    let found =
        traveling_data_service::find_by_dates(&state.db, payload.from_date, payload.to_date)
            .await?;

    Ok(Json(found))
}

pub async fn find_all(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<traveling_data::Model>>> {
    let found = traveling_data_service::find_all(&state.db).await?;

    Ok(Json(found))
}

pub async fn update_dates(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<DateRangeRequest>,
) -> AppResult<StatusCode> {
    traveling_data_service::update_dates(&state.db, id, payload.from_date, payload.to_date)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    traveling_data_service::delete_by_id(&state.db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
