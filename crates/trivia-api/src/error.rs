//! API error type and the fixed JSON error envelope.
//!
//! Every failure maps to exactly one of five status codes, each with a fixed
//! message body — no dynamic detail ever reaches the client. Underlying
//! causes are logged at the call site helpers below instead.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
  /// The request body could not be read as JSON at all.
  #[error("bad request")]
  BadRequest,

  /// Unknown route, unknown category, unknown path parameter shape, or a
  /// page past the end of the main listing.
  #[error("resource not found")]
  NotFound,

  /// Known path, unmapped method.
  #[error("method not allowed")]
  MethodNotAllowed,

  /// Missing or mistyped body fields, an unknown delete target, or a
  /// storage failure on a write path.
  #[error("unprocessable")]
  Unprocessable,

  /// Storage failure on a plain read path.
  #[error("internal server error")]
  Internal,
}

impl ApiError {
  fn status(self) -> StatusCode {
    match self {
      ApiError::BadRequest => StatusCode::BAD_REQUEST,
      ApiError::NotFound => StatusCode::NOT_FOUND,
      ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
      ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
      ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn message(self) -> &'static str {
    match self {
      ApiError::BadRequest => "Bad Request",
      ApiError::NotFound => "Resource Not Found",
      ApiError::MethodNotAllowed => "Method Not Allowed",
      ApiError::Unprocessable => "Unprocessable resource",
      ApiError::Internal => "Internal server error",
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let body = json!({
      "success": false,
      "error":   status.as_u16(),
      "message": self.message(),
    });
    (status, Json(body)).into_response()
  }
}

// ─── Storage-failure mapping ─────────────────────────────────────────────────
//
// Each handler names one of these at every storage call site, so the
// error-kind → status table stays explicit per operation.

/// A storage failure on a plain read path: logged, surfaced as a 500.
pub fn internal<E: std::error::Error>(err: E) -> ApiError {
  tracing::error!("storage failure: {err}");
  ApiError::Internal
}

/// A storage failure on a write path: logged, surfaced as a 422.
pub fn unprocessable<E: std::error::Error>(err: E) -> ApiError {
  tracing::warn!("storage failure: {err}");
  ApiError::Unprocessable
}

/// A storage failure on the search path, which reports not-found on
/// internal errors.
pub fn not_found<E: std::error::Error>(err: E) -> ApiError {
  tracing::warn!("storage failure: {err}");
  ApiError::NotFound
}
