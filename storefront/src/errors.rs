// storefront/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use flow::FlowError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Migration Error: {0}")]
  Migrate(#[from] sqlx::migrate::MigrateError),

  #[error("Workflow Error: {source}")]
  Workflow {
    #[from]
    source: FlowError,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String),

  // A pipeline reported Stopped where the request needed it to complete.
  #[error("Pipeline execution was halted by a handler.")]
  PipelineHaltedByHandler,
}

impl AppError {
  /// The text sent to the client. Server-side failures never leak their details.
  pub fn client_message(&self) -> &str {
    match self {
      AppError::Validation(m) | AppError::NotFound(m) => m,
      _ => "Internal server error",
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, "Responding with client error");
    }
    HttpResponse::build(status).json(json!({ "message": self.client_message() }))
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn client_errors_keep_their_message() {
    let err = AppError::Validation("Invalid email format".to_string());
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(err.client_message(), "Invalid email format");

    let err = AppError::NotFound("Item not found in cart".to_string());
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(err.client_message(), "Item not found in cart");
  }

  #[test]
  fn server_errors_are_generic() {
    let err = AppError::from(FlowError::HandlerMissing {
      step_name: "clear_cart".to_string(),
    });
    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.client_message(), "Internal server error");
    assert_eq!(AppError::PipelineHaltedByHandler.client_message(), "Internal server error");
  }
}
