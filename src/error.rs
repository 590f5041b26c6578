use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Error taxonomy shared by validators, services and the HTTP surface.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("{0}")]
    NonExistentItem(String),
    #[error("{0}")]
    AlreadyExistingItem(String),
    #[error("{0}")]
    FailedInitialization(String),
    #[error("{0}")]
    Internal(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            AppError::InvalidArgument(_) => "InvalidArgument",
            AppError::NonExistentItem(_) => "NonExistentItem",
            AppError::AlreadyExistingItem(_) => "AlreadyExistingItem",
            AppError::FailedInitialization(_) => "FailedInitialization",
            AppError::Internal(_) | AppError::Database(_) => "Internal",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            AppError::NonExistentItem(_) => StatusCode::NOT_FOUND,
            AppError::AlreadyExistingItem(_) => StatusCode::CONFLICT,
            AppError::FailedInitialization(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Database failures are logged in full but never echoed to clients.
        let message = match &self {
            AppError::Database(e) => {
                tracing::error!(error = %e, "database error");
                "Internal server error".to_string()
            }
            AppError::Internal(m) => {
                tracing::error!(error = %m, "internal error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({
            "kind": self.kind(),
            "message": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_follows_taxonomy() {
        assert_eq!(
            AppError::InvalidArgument("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NonExistentItem("x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::AlreadyExistingItem("x".into()).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::FailedInitialization("x".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
