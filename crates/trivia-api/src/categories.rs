//! Handlers for `/categories` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/categories` | Map of id → label; 404 when no categories exist |
//! | `GET`  | `/categories/:id/questions?page=N` | 404 for an unknown category |

use axum::{
  Json,
  extract::{Path, Query, State},
};
use serde_json::{Map, Value, json};
use trivia_core::{category::Category, page::paginate, store::TriviaStore};

use crate::{
  AppState,
  error::{self, ApiError},
  questions::PageQuery,
};

/// The `categories` object shared by several responses: keys are the
/// stringified ids, values the display labels.
pub fn category_map(categories: &[Category]) -> Map<String, Value> {
  categories
    .iter()
    .map(|c| (c.id.to_string(), Value::from(c.label.clone())))
    .collect()
}

/// `GET /categories`
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Value>, ApiError>
where
  S: TriviaStore,
{
  let categories =
    state.store.list_categories().await.map_err(error::internal)?;

  if categories.is_empty() {
    return Err(ApiError::NotFound);
  }

  Ok(Json(json!({
    "success":    true,
    "categories": category_map(&categories),
  })))
}

/// `GET /categories/:id/questions?page=N`
///
/// An unknown category is a 404 regardless of the page parameter; an empty
/// page for a known category is not an error.
pub async fn questions<S>(
  State(state): State<AppState<S>>,
  Path(category_id): Path<String>,
  Query(query): Query<PageQuery>,
) -> Result<Json<Value>, ApiError>
where
  S: TriviaStore,
{
  let category_id: i64 =
    category_id.parse().map_err(|_| ApiError::NotFound)?;

  let category = state
    .store
    .get_category(category_id)
    .await
    .map_err(error::internal)?
    .ok_or(ApiError::NotFound)?;

  let questions = state
    .store
    .questions_in_category(category_id)
    .await
    .map_err(error::internal)?;

  let page = paginate(&questions, query.number());

  Ok(Json(json!({
    "success":         true,
    "category":        category.label,
    "questions":       page,
    "total_questions": questions.len(),
  })))
}
