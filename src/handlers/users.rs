use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::entities::user;
use crate::error::AppResult;
use crate::services::users as user_service;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Register a new user; the password is hashed server-side.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<Json<user::Model>> {
    let saved = user_service::register(
        &state.db,
        payload.username,
        payload.email,
        payload.password,
    )
    .await?;

    Ok(Json(saved))
}

/// Legacy credentials-in-path login; 200 on match, no token is issued.
pub async fn login(
    State(state): State<AppState>,
    Path((username, password)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    user_service::login(&state.db, &username, &password).await?;

    Ok(StatusCode::OK)
}

pub async fn find_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<user::Model>> {
    let user = user_service::find_by_username(&state.db, &username).await?;

    Ok(Json(user))
}

pub async fn find_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<user::Model>> {
    let user = user_service::find_by_email(&state.db, &email).await?;

    Ok(Json(user))
}

pub async fn find_all(State(state): State<AppState>) -> AppResult<Json<Vec<user::Model>>> {
    let users = user_service::find_all(&state.db).await?;

    Ok(Json(users))
}

pub async fn update_password(
    State(state): State<AppState>,
    Path((username, new_password, old_password)): Path<(String, String, String)>,
) -> AppResult<StatusCode> {
    user_service::update_password(&state.db, &username, &new_password, &old_password).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn update_email(
    State(state): State<AppState>,
    Path((new_email, old_email, password)): Path<(String, String, String)>,
) -> AppResult<StatusCode> {
    user_service::update_email(&state.db, &new_email, &old_email, &password).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_by_username(
    State(state): State<AppState>,
    Path((username, password)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    user_service::delete_by_username(&state.db, &username, &password).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_by_email(
    State(state): State<AppState>,
    Path((email, password)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    user_service::delete_by_email(&state.db, &email, &password).await?;

    Ok(StatusCode::NO_CONTENT)
}
