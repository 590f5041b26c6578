use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::entities::transport;
use crate::error::AppResult;
use crate::services::transports::{self as transport_service, NewTransport};
use crate::AppState;

/// Body of the kind-specific create endpoints; the kind comes from the path.
#[derive(Debug, Deserialize)]
pub struct CreateTransportRequest {
    pub fare_class: String,
}

pub async fn save_bus(
    State(state): State<AppState>,
    Json(payload): Json<CreateTransportRequest>,
) -> AppResult<Json<transport::Model>> {
    let saved = transport_service::save_bus(&state.db, &payload.fare_class).await?;

    Ok(Json(saved))
}

pub async fn save_airplane(
    State(state): State<AppState>,
    Json(payload): Json<CreateTransportRequest>,
) -> AppResult<Json<transport::Model>> {
    let saved = transport_service::save_airplane(&state.db, &payload.fare_class).await?;

    Ok(Json(saved))
}

pub async fn save_all(
    State(state): State<AppState>,
    Json(payload): Json<Vec<NewTransport>>,
) -> AppResult<Json<Vec<transport::Model>>> {
    let saved = transport_service::save_all(&state.db, payload).await?;

    Ok(Json(saved))
}

pub async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<transport::Model>> {
    let found = transport_service::find_by_id(&state.db, id).await?;

    Ok(Json(found))
}

pub async fn find_all_buses_by_class(
    State(state): State<AppState>,
    Path(fare_class): Path<String>,
) -> AppResult<Json<Vec<transport::Model>>> {
    let found = transport_service::find_all_buses_by_class(&state.db, &fare_class).await?;

    Ok(Json(found))
}

pub async fn find_all_airplanes_by_class(
    State(state): State<AppState>,
    Path(fare_class): Path<String>,
) -> AppResult<Json<Vec<transport::Model>>> {
    let found = transport_service::find_all_airplanes_by_class(&state.db, &fare_class).await?;

    Ok(Json(found))
}

pub async fn find_all_buses(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<transport::Model>>> {
    let found = transport_service::find_all_buses(&state.db).await?;

    Ok(Json(found))
}

pub async fn find_all_airplanes(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<transport::Model>>> {
    let found = transport_service::find_all_airplanes(&state.db).await?;

    Ok(Json(found))
}

pub async fn update_class(
    State(state): State<AppState>,
    Path((fare_class, id)): Path<(String, i64)>,
) -> AppResult<StatusCode> {
    transport_service::update_class(&state.db, id, &fare_class).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    transport_service::delete_by_id(&state.db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
