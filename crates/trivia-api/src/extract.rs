//! A strict JSON body extractor.
//!
//! Splits [`JsonRejection`] along the error taxonomy: a body that is not
//! readable JSON at all is a 400, a body that is JSON but does not match the
//! expected shape (missing or mistyped fields) is a 422. Either way the
//! handler body never runs on invalid input.

use axum::{
  Json,
  extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON request body, validated against `T` before the handler runs.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
  T: DeserializeOwned,
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    match Json::<T>::from_request(req, state).await {
      Ok(Json(value)) => Ok(Self(value)),
      Err(JsonRejection::JsonDataError(err)) => {
        tracing::debug!("body shape mismatch: {err}");
        Err(ApiError::Unprocessable)
      }
      Err(err) => {
        tracing::debug!("unreadable request body: {err}");
        Err(ApiError::BadRequest)
      }
    }
  }
}
