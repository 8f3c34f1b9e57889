//! Category — the display grouping for questions.

use serde::{Deserialize, Serialize};

/// A question category.
///
/// Read-only over HTTP; rows enter the store through seeding or
/// [`TriviaStore::add_category`](crate::store::TriviaStore::add_category).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
  pub id:    i64,
  /// Display label ("Science", "Art", ...). Stored and serialised as `type`.
  #[serde(rename = "type")]
  pub label: String,
}
