//! Maps game errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::error::ModeError;
use crate::game::MoveError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Move(#[from] MoveError),

    #[error("{0}")]
    Mode(#[from] ModeError),
}

impl ApiError {
    fn status_and_type(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Move(MoveError::GameOver) => (StatusCode::CONFLICT, "game_over"),
            ApiError::Move(MoveError::InvalidColumn) => (StatusCode::BAD_REQUEST, "invalid_column"),
            ApiError::Move(MoveError::ColumnFull) => (StatusCode::CONFLICT, "column_full"),
            ApiError::Move(MoveError::PlacementFailed) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "placement_failed")
            }
            ApiError::Mode(_) => (StatusCode::BAD_REQUEST, "invalid_mode"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_type();

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

/// Result type alias for handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_statuses() {
        let cases = [
            (MoveError::GameOver, StatusCode::CONFLICT),
            (MoveError::InvalidColumn, StatusCode::BAD_REQUEST),
            (MoveError::ColumnFull, StatusCode::CONFLICT),
            (MoveError::PlacementFailed, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }

    #[test]
    fn test_mode_error_status() {
        let err = ApiError::from(ModeError::ConnectTooShort(1));
        assert_eq!(err.status_and_type(), (StatusCode::BAD_REQUEST, "invalid_mode"));
    }
}
