//! Error types and error handling for the application
//!
//! Handler errors implement `IntoResponse` so every failure reaches the client
//! as `{ "detail": ..., "status": ... }`.

use crate::state::RegistryError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Signup was rejected (unknown activity, duplicate email, full activity)
    #[error("{0}")]
    Signup(RegistryError),

    /// Unregister was rejected (unknown activity or participant)
    #[error("{0}")]
    Unregister(RegistryError),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status this error is reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Signup(_) => StatusCode::BAD_REQUEST,
            AppError::Unregister(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "detail": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let not_found = RegistryError::ActivityNotFound("Knitting".to_string());
        assert_eq!(
            AppError::Signup(not_found.clone()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Unregister(not_found).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Internal(anyhow::anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_detail_message_passes_through() {
        let err = AppError::Signup(RegistryError::AlreadySignedUp {
            activity: "Chess Club".to_string(),
            email: "michael@mergington.edu".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Student is already signed up for this activity"
        );
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
