//! JSON REST API for the trivia backend.
//!
//! Exposes an axum [`Router`] backed by any [`TriviaStore`]. Transport
//! concerns are the caller's responsibility; the server binary in
//! `src/bin/server.rs` wires the router to a TCP listener.

pub mod categories;
pub mod error;
pub mod extract;
pub mod questions;
pub mod quizzes;

pub use error::ApiError;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  http::{Method, header},
  routing::{delete, get, post},
};
use serde::Deserialize;
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};
use trivia_core::{quiz::IndexPicker, store::TriviaStore};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: TriviaStore> {
  pub store:  Arc<S>,
  /// Random source for the quiz draw; injectable so tests can pin it.
  pub picker: Arc<dyn IndexPicker>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised router for `state`.
///
/// Unknown paths fall back to a JSON 404; a known path with an unmapped
/// method falls back to a JSON 405, so every failure carries the fixed
/// error envelope.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: TriviaStore + Clone + Send + Sync + 'static,
{
  Router::new()
    .route(
      "/categories",
      get(categories::list::<S>).fallback(method_not_allowed),
    )
    .route(
      "/categories/{category_id}/questions",
      get(categories::questions::<S>).fallback(method_not_allowed),
    )
    .route(
      "/questions",
      get(questions::list::<S>)
        .post(questions::create::<S>)
        .fallback(method_not_allowed),
    )
    .route(
      "/questions/{question_id}",
      delete(questions::delete_one::<S>).fallback(method_not_allowed),
    )
    .route(
      "/questions/search",
      post(questions::search::<S>).fallback(method_not_allowed),
    )
    .route(
      "/quizzes",
      post(quizzes::play::<S>).fallback(method_not_allowed),
    )
    .fallback(not_found)
    .layer(TraceLayer::new_for_http())
    .layer(cors())
    .with_state(state)
}

/// The frontend is served from a different origin; allow the original
/// service's method and header lists from anywhere.
fn cors() -> CorsLayer {
  CorsLayer::new()
    .allow_origin(Any)
    .allow_methods([
      Method::GET,
      Method::PUT,
      Method::POST,
      Method::DELETE,
      Method::OPTIONS,
    ])
    .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

async fn not_found() -> ApiError {
  ApiError::NotFound
}

async fn method_not_allowed() -> ApiError {
  ApiError::MethodNotAllowed
}

// ─── Integration tests ────────────────────────────────────────────────────────
