use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use crate::services::{RatingError, TourError};

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),

    DatabaseError(String),

    ValidationError(String),

    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            ApiError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Errors render as plain text. Not-found and validation messages are
/// returned verbatim; server-side failures are logged and replaced by a
/// generic message.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::InternalError(err.to_string())
    }
}

impl From<RatingError> for ApiError {
    fn from(err: RatingError) -> Self {
        match err {
            RatingError::TourNotFound(_) | RatingError::RatingNotFound { .. } => {
                ApiError::NotFound(err.to_string())
            }
            RatingError::Database(e) => ApiError::DatabaseError(e.to_string()),
        }
    }
}

impl From<TourError> for ApiError {
    fn from(err: TourError) -> Self {
        match err {
            TourError::NotFound(msg) => ApiError::NotFound(msg),
            TourError::Validation(msg) => ApiError::ValidationError(msg),
            TourError::Database(e) => ApiError::DatabaseError(e.to_string()),
        }
    }
}

impl ApiError {
    pub fn not_found(resource: &str, id: impl fmt::Display) -> Self {
        ApiError::NotFound(format!("{} {} not found", resource, id))
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::ValidationError(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        ApiError::InternalError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CustomerId, TourId};
    use sea_orm::DbErr;

    #[test]
    fn rating_not_found_maps_to_404() {
        let err: ApiError = RatingError::TourNotFound(TourId::new(7)).into();
        assert!(matches!(&err, ApiError::NotFound(msg) if msg == "Tour does not exist 7"));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

        let err: ApiError = RatingError::RatingNotFound {
            tour_id: TourId::new(1),
            customer_id: CustomerId::new(4),
        }
        .into();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn database_errors_are_server_errors() {
        let err: ApiError = RatingError::Database(DbErr::Custom("UNIQUE".to_string())).into();
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn tour_validation_maps_to_400() {
        let err: ApiError = TourError::Validation("bad region".to_string()).into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_helper_message() {
        let err = ApiError::not_found("Rating", 12);
        assert!(matches!(err, ApiError::NotFound(msg) if msg == "Rating 12 not found"));
    }
}
