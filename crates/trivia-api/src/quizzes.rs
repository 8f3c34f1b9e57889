//! Handler for `POST /quizzes` — the quiz-play draw.

use axum::{Json, extract::State};
use serde::{Deserialize, Deserializer};
use serde_json::{Value, json};
use trivia_core::{quiz, store::TriviaStore};

use crate::{
  AppState,
  error::{self, ApiError},
  extract::JsonBody,
};

/// The `quiz_category` object sent by clients. Only the id matters here; the
/// display label the frontend includes is ignored.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
  #[serde(default)]
  pub id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct QuizBody {
  /// Must be present in the payload, but may be `null`. Telling "absent"
  /// (a 422) apart from "null" (no restriction) needs the double-Option
  /// deserialiser below.
  #[serde(default, deserialize_with = "present")]
  pub quiz_category:      Option<Option<QuizCategory>>,
  pub previous_questions: Option<Vec<i64>>,
}

fn present<'de, D>(
  deserializer: D,
) -> Result<Option<Option<QuizCategory>>, D::Error>
where
  D: Deserializer<'de>,
{
  Option::<QuizCategory>::deserialize(deserializer).map(Some)
}

/// `POST /quizzes`
///
/// Returns one uniformly-random question outside `previous_questions`, or
/// `null` once the eligible set is exhausted. A category id of 0 is a valid
/// id: restriction is keyed on the presence of a non-null `id` field, never
/// on truthiness.
pub async fn play<S>(
  State(state): State<AppState<S>>,
  JsonBody(body): JsonBody<QuizBody>,
) -> Result<Json<Value>, ApiError>
where
  S: TriviaStore,
{
  let (Some(quiz_category), Some(previous)) =
    (body.quiz_category, body.previous_questions)
  else {
    return Err(ApiError::Unprocessable);
  };

  let category_id = quiz_category.and_then(|c| c.id);

  let eligible = state
    .store
    .eligible_questions(category_id, &previous)
    .await
    .map_err(error::unprocessable)?;

  let question = quiz::draw(eligible, state.picker.as_ref());

  Ok(Json(json!({
    "success":  true,
    "question": question,
  })))
}
