use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::storage::StorageError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid search parameters")]
    InvalidPayload,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Internal error: {0}")]
    Internal(#[from] StorageError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidPayload => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::NotFound(..) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Internal(source) => {
                // Clients get a generic message; the fault goes to the log.
                error!("request failed: {source}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(
            AppError::InvalidPayload.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("Destination").into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Internal(StorageError::Database(sqlx::Error::PoolClosed))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
