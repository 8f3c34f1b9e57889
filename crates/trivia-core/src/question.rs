//! Question records and their wire shape.

use serde::{Deserialize, Serialize};

/// A stored trivia question, in its externally-visible shape.
///
/// Serialises to exactly the JSON object clients receive: `id`, `question`,
/// `answer`, `category`, `difficulty`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
  pub id:         i64,
  pub question:   String,
  pub answer:     String,
  /// Identifier of the owning [`Category`](crate::category::Category).
  /// Not checked at write time; a dangling value simply never surfaces in
  /// category-scoped listings.
  pub category:   i64,
  pub difficulty: i64,
}

/// Input for [`TriviaStore::add_question`](crate::store::TriviaStore::add_question).
/// The store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQuestion {
  pub question:   String,
  pub answer:     String,
  pub category:   i64,
  pub difficulty: i64,
}
