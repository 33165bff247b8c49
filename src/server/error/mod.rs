//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and the conversion from errors
//! into the uniform `ServiceResponse` envelope. Services never let an `AppError` escape to
//! the controller: they turn it into an envelope with `into_service_response`. Extractors
//! and startup code rely on the `IntoResponse` implementation instead.

pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    model::api::{Empty, ServiceResponse},
    server::error::{config::ConfigError, validation::ValidationError},
};

/// Top-level application error type.
///
/// Aggregates every error that can occur in the application. Variants map onto the three
/// client-visible outcomes: 400 for rejected input, 404 for missing resources, and 500 for
/// everything else.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Listener or other I/O failure while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request input failed validation.
    ///
    /// Results in 400 Bad Request listing every violated rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    /// Converts the error into a failed envelope.
    ///
    /// Client errors keep their own message. Any other error is logged with its full
    /// details and replaced by `internal_message`, so store failures never reach the caller.
    ///
    /// # Arguments
    /// - `internal_message` - Message returned to the client for 500 responses
    ///
    /// # Returns
    /// - `ServiceResponse<T>` - Failed envelope with a `null` payload
    pub fn into_service_response<T>(self, internal_message: &str) -> ServiceResponse<T> {
        match self {
            Self::Validation(err) => {
                ServiceResponse::failure(StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::BadRequest(msg) => ServiceResponse::failure(StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => ServiceResponse::failure(StatusCode::NOT_FOUND, msg),
            err => {
                tracing::error!(error = %err, "{}", internal_message);
                ServiceResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, internal_message)
            }
        }
    }
}

/// Converts application errors into envelope responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation` and `BadRequest`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For all other error types, with a generic message
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.into_service_response::<Empty>("Internal server error")
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::error::validation::FieldIssue;

    #[test]
    fn validation_error_maps_to_bad_request() {
        let err = AppError::Validation(ValidationError::new(vec![FieldIssue::new(
            "name",
            "String must contain at most 15 character(s)",
        )]));

        let response = err.into_service_response::<Empty>("unused");

        assert_eq!(response.status_code, 400);
        assert!(!response.success);
        assert_eq!(
            response.message,
            "Invalid data supplied: name: String must contain at most 15 character(s)"
        );
    }

    #[test]
    fn not_found_keeps_message() {
        let response = AppError::NotFound("Card not found".to_string())
            .into_service_response::<Empty>("unused");

        assert_eq!(response.status_code, 404);
        assert_eq!(response.message, "Card not found");
    }

    #[test]
    fn database_error_hides_details() {
        let err = AppError::DbErr(sea_orm::DbErr::Custom("connection reset".to_string()));

        let response = err.into_service_response::<Empty>("An error occurred while finding card");

        assert_eq!(response.status_code, 500);
        assert_eq!(response.message, "An error occurred while finding card");
        assert!(response.response_object.is_none());
    }
}
