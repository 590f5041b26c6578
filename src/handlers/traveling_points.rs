use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::entities::traveling_point;
use crate::error::AppResult;
use crate::services::traveling_points::{self as point_service, NewTravelingPoint};
use crate::AppState;

pub async fn save(
    State(state): State<AppState>,
    Json(payload): Json<NewTravelingPoint>,
) -> AppResult<Json<traveling_point::Model>> {
    let saved = point_service::save(&state.db, payload).await?;

    Ok(Json(saved))
}

pub async fn save_all(
    State(state): State<AppState>,
    Json(payload): Json<Vec<NewTravelingPoint>>,
) -> AppResult<Json<Vec<traveling_point::Model>>> {
    let saved = point_service::save_all(&state.db, payload).await?;

    Ok(Json(saved))
}

pub async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<traveling_point::Model>> {
    let point = point_service::find_by_id(&state.db, id).await?;

    Ok(Json(point))
}

pub async fn find_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<traveling_point::Model>> {
    let point = point_service::find_by_name(&state.db, &name).await?;

    Ok(Json(point))
}

pub async fn find_all(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<traveling_point::Model>>> {
    let points = point_service::find_all(&state.db).await?;

    Ok(Json(points))
}

pub async fn update_name(
    State(state): State<AppState>,
    Path((new_name, old_name)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    point_service::update_name(&state.db, &new_name, &old_name).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    point_service::delete_by_id(&state.db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
