//! API error definitions

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Error kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// Startup configuration problem (dictionary, listener)
  Config,
  /// Unexpected failure while handling a request
  Internal,
}

impl ApiErrorKind {
  /// Machine-readable error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::Config => "config_error",
      Self::Internal => "internal_error",
    }
  }

  /// HTTP status for the error
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::Config | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// API error
#[derive(Debug, Error)]
pub enum ApiError {
  /// Startup configuration problem
  #[error("configuration error: {0}")]
  Config(String),

  /// Unexpected internal failure
  #[error("internal error: {0}")]
  Internal(String),
}

impl ApiError {
  /// Error kind
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::Config(_) => ApiErrorKind::Config,
      Self::Internal(_) => ApiErrorKind::Internal,
    }
  }

  /// Machine-readable error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// HTTP status for the error
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// Creates a configuration error
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }

  /// Creates an internal error
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }
}

/// JSON structure of an error response
#[derive(Serialize)]
struct ErrorResponse {
  error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
  code: &'static str,
  message: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let body = ErrorResponse {
      error: ErrorBody {
        code: self.code(),
        message: self.to_string(),
      },
    };

    (status, Json(body)).into_response()
  }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;
