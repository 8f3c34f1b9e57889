//! Handlers for `/questions` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/questions?page=N` | One page of all questions + category map |
//! | `POST`   | `/questions` | Body: all four question fields, required |
//! | `DELETE` | `/questions/:id?page=N` | Unknown id is a 422, non-integer id a 404 |
//! | `POST`   | `/questions/search?page=N` | Body: `{"searchTerm": "..."}` |

use axum::{
  Json,
  extract::{Path, Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};
use trivia_core::{page::paginate, question::NewQuestion, store::TriviaStore};

use crate::{
  AppState,
  categories::category_map,
  error::{self, ApiError},
  extract::JsonBody,
};

// ─── Page parameter ───────────────────────────────────────────────────────────

/// Lenient `?page=N` query: absent, empty, negative or unparsable values all
/// fall back to page 1.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
  pub page: Option<String>,
}

impl PageQuery {
  pub fn number(&self) -> usize {
    self.page.as_deref().and_then(|p| p.parse().ok()).unwrap_or(1)
  }
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /questions?page=N`
///
/// `current_category` is always null here: no category is "current" at the
/// top-level listing.
pub async fn list<S>(
  State(state): State<AppState<S>>,
  Query(query): Query<PageQuery>,
) -> Result<Json<Value>, ApiError>
where
  S: TriviaStore,
{
  let questions =
    state.store.list_questions().await.map_err(error::internal)?;
  let categories =
    state.store.list_categories().await.map_err(error::internal)?;

  let page = paginate(&questions, query.number());
  if page.is_empty() {
    return Err(ApiError::NotFound);
  }

  Ok(Json(json!({
    "success":          true,
    "questions":        page,
    "total_questions":  questions.len(),
    "categories":       category_map(&categories),
    "current_category": null,
  })))
}

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub question:   String,
  pub answer:     String,
  pub difficulty: i64,
  pub category:   i64,
}

/// `POST /questions` — all four fields required; the extractor turns a
/// missing or mistyped field into a 422 before anything is persisted.
pub async fn create<S>(
  State(state): State<AppState<S>>,
  JsonBody(body): JsonBody<CreateBody>,
) -> Result<Json<Value>, ApiError>
where
  S: TriviaStore,
{
  let created = state
    .store
    .add_question(NewQuestion {
      question:   body.question,
      answer:     body.answer,
      category:   body.category,
      difficulty: body.difficulty,
    })
    .await
    .map_err(error::unprocessable)?;

  // Recount after the insert so the reported total includes the new row.
  let total = state
    .store
    .list_questions()
    .await
    .map_err(error::unprocessable)?
    .len();

  Ok(Json(json!({
    "success":               true,
    "created_question_id":   created.id,
    "created_question_text": created.question,
    "total_questions":       total,
  })))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /questions/:id?page=N`
///
/// A non-integer id does not name a resource (404); a well-formed id with no
/// row behind it is a 422. Success returns the requested page of whatever
/// remains, which may be empty.
pub async fn delete_one<S>(
  State(state): State<AppState<S>>,
  Path(question_id): Path<String>,
  Query(query): Query<PageQuery>,
) -> Result<Json<Value>, ApiError>
where
  S: TriviaStore,
{
  let question_id: i64 =
    question_id.parse().map_err(|_| ApiError::NotFound)?;

  let deleted = state
    .store
    .delete_question(question_id)
    .await
    .map_err(error::unprocessable)?;
  if !deleted {
    return Err(ApiError::Unprocessable);
  }

  let remaining =
    state.store.list_questions().await.map_err(error::unprocessable)?;
  let page = paginate(&remaining, query.number());

  Ok(Json(json!({
    "success":             true,
    "deleted_question_id": question_id,
    "questions":           page,
    "total_questions":     remaining.len(),
  })))
}

// ─── Search ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchBody {
  #[serde(rename = "searchTerm")]
  pub search_term: String,
}

/// `POST /questions/search?page=N`
///
/// An empty term matches every question; a missing `searchTerm` field is
/// rejected by the extractor (422). Zero matches is a 200 with an empty
/// page, not an error.
pub async fn search<S>(
  State(state): State<AppState<S>>,
  Query(query): Query<PageQuery>,
  JsonBody(body): JsonBody<SearchBody>,
) -> Result<Json<Value>, ApiError>
where
  S: TriviaStore,
{
  let matches = state
    .store
    .search_questions(&body.search_term)
    .await
    .map_err(error::not_found)?;

  let page = paginate(&matches, query.number());

  Ok(Json(json!({
    "success":          true,
    "questions":        page,
    "total_questions":  matches.len(),
    "current_category": null,
  })))
}
