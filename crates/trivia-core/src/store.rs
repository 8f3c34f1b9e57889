//! The `TriviaStore` trait — the storage-accessor seam.
//!
//! The trait is implemented by storage backends (e.g. `trivia-store-sqlite`).
//! The API crate depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  category::Category,
  question::{NewQuestion, Question},
};

/// Abstraction over the trivia storage backend.
///
/// Listing methods return fully-ordered result sets — questions by ascending
/// id, categories by ascending display label — so that pagination above this
/// seam is deterministic across repeated calls absent mutation.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait TriviaStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Categories ────────────────────────────────────────────────────────

  /// All categories, ordered by display label.
  fn list_categories(
    &self,
  ) -> impl Future<Output = Result<Vec<Category>, Self::Error>> + Send + '_;

  /// Retrieve a category by id. Returns `None` if not found.
  fn get_category(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Category>, Self::Error>> + Send + '_;

  /// Insert a category and return it with its assigned id.
  ///
  /// No HTTP endpoint creates categories; this exists for seeding and tests.
  fn add_category<'a>(
    &'a self,
    label: &'a str,
  ) -> impl Future<Output = Result<Category, Self::Error>> + Send + 'a;

  // ── Questions ─────────────────────────────────────────────────────────

  /// All questions, ordered by ascending id.
  fn list_questions(
    &self,
  ) -> impl Future<Output = Result<Vec<Question>, Self::Error>> + Send + '_;

  /// Questions whose text contains `term` as a case-insensitive substring,
  /// ordered by ascending id. An empty `term` matches everything.
  fn search_questions<'a>(
    &'a self,
    term: &'a str,
  ) -> impl Future<Output = Result<Vec<Question>, Self::Error>> + Send + 'a;

  /// Questions stored under `category_id`, ordered by ascending id.
  fn questions_in_category(
    &self,
    category_id: i64,
  ) -> impl Future<Output = Result<Vec<Question>, Self::Error>> + Send + '_;

  /// Insert a question and return it with its assigned id.
  fn add_question(
    &self,
    input: NewQuestion,
  ) -> impl Future<Output = Result<Question, Self::Error>> + Send + '_;

  /// Delete a question by id. Returns `false` when no such row existed.
  fn delete_question(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Quiz ──────────────────────────────────────────────────────────────

  /// The eligible set for a quiz draw: every question whose id is not in
  /// `excluded`, restricted to `category_id` when one is given, ordered by
  /// ascending id.
  fn eligible_questions<'a>(
    &'a self,
    category_id: Option<i64>,
    excluded: &'a [i64],
  ) -> impl Future<Output = Result<Vec<Question>, Self::Error>> + Send + 'a;
}
