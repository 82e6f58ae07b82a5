use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Message returned when a submission lacks a name or an email.
pub const MISSING_FIELD_MESSAGE: &str = "Name and email are required!";

/// Structured error response returned by all endpoints on failure.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Human-readable error description.
    #[schema(example = "Name and email are required!")]
    pub message: String,
}

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// `name` or `email` is absent, null or empty.
    #[error("{}", MISSING_FIELD_MESSAGE)]
    MissingField,
    /// The request body could not be decoded as a submission object.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::MissingField => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message: MISSING_FIELD_MESSAGE.into(),
                },
            ),
            AppError::InvalidBody(detail) => {
                tracing::debug!("Rejected request body: {}", detail);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorBody {
                        message: format!("Invalid request body: {detail}"),
                    },
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}
