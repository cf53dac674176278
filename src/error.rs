use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("You don't have permission to view this booking")]
    AccessDenied,

    #[error("Failed to load {0}")]
    FetchError(String),

    #[error("Booking failed: {0}")]
    BookingError(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    Unauthorized(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AccessDenied => StatusCode::FORBIDDEN,
            AppError::FetchError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BookingError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::AccessDenied => "ACCESS_DENIED",
            AppError::FetchError(_) => "FETCH_ERROR",
            AppError::BookingError(_) => "BOOKING_ERROR",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateBookingId(id) => {
                AppError::BookingError(format!("duplicate booking id {}", id))
            }
            StoreError::EmailTaken(_) => AppError::ValidationError("Email already exists".to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();
        let message = self.to_string();

        match &self {
            // Валидационные ошибки - это подсказки пользователю, не инциденты
            AppError::ValidationError(_) | AppError::Unauthorized(_) => {
                tracing::debug!(code, %message, "request rejected");
            }
            _ => {
                tracing::error!(code, %message, "request failed");
            }
        }

        let body = json!({
            "error": {
                "code": code,
                "message": message,
            }
        });

        (status, Json(body)).into_response()
    }
}
