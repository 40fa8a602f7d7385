// src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Duplicate Name: {0}")]
  DuplicateName(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Storage(#[from] sqlx::Error),
}

/// Whether `err` is the store's unique-constraint violation signal.
///
/// Insert collisions on `products.name` surface this way; the check lives
/// behind this helper so handler code never inspects Postgres error codes.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
  match err {
    sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
    _ => false,
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response. The client only
    // sees the generic message below; raw store detail stays in the logs.
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      AppError::DuplicateName(_) => HttpResponse::Conflict().json(json!({"error": "Product name already exists."})),
      AppError::NotFound(_) => HttpResponse::NotFound().json(json!({"error": "Product not found."})),
      AppError::Config(_) => HttpResponse::InternalServerError().json(json!({"error": "Configuration issue."})),
      AppError::Storage(_) => HttpResponse::InternalServerError().json(json!({"error": "Database error."})),
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::http::StatusCode;

  #[test]
  fn validation_maps_to_400() {
    let err = AppError::Validation("bad".into());
    assert_eq!(err.error_response().status(), StatusCode::BAD_REQUEST);
  }

  #[test]
  fn duplicate_name_maps_to_409() {
    let err = AppError::DuplicateName("bolt".into());
    assert_eq!(err.error_response().status(), StatusCode::CONFLICT);
  }

  #[test]
  fn not_found_maps_to_404() {
    let err = AppError::NotFound("missing".into());
    assert_eq!(err.error_response().status(), StatusCode::NOT_FOUND);
  }

  #[test]
  fn storage_maps_to_500() {
    let err = AppError::Storage(sqlx::Error::PoolClosed);
    assert_eq!(err.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[test]
  fn non_database_errors_are_not_unique_violations() {
    assert!(!is_unique_violation(&sqlx::Error::PoolClosed));
    assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
  }
}
