//! [`SqliteStore`] — the SQLite implementation of [`TriviaStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use trivia_core::{
  category::Category,
  question::{NewQuestion, Question},
  store::TriviaStore,
};

use crate::{Result, schema::SCHEMA};

// ─── Row mapping ─────────────────────────────────────────────────────────────

fn question_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Question> {
  Ok(Question {
    id:         row.get(0)?,
    question:   row.get(1)?,
    answer:     row.get(2)?,
    category:   row.get(3)?,
    difficulty: row.get(4)?,
  })
}

fn category_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Category> {
  Ok(Category { id: row.get(0)?, label: row.get(1)? })
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A trivia store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── TriviaStore impl ────────────────────────────────────────────────────────

impl TriviaStore for SqliteStore {
  type Error = crate::Error;

  // ── Categories ────────────────────────────────────────────────────────────

  async fn list_categories(&self) -> Result<Vec<Category>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare("SELECT id, type FROM categories ORDER BY type")?;
        let rows = stmt
          .query_map([], category_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn get_category(&self, id: i64) -> Result<Option<Category>> {
    let row = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, type FROM categories WHERE id = ?1",
              rusqlite::params![id],
              category_from_row,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(row)
  }

  async fn add_category(&self, label: &str) -> Result<Category> {
    let label = label.to_owned();
    let category = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO categories (type) VALUES (?1)",
          rusqlite::params![label],
        )?;
        Ok(Category { id: conn.last_insert_rowid(), label })
      })
      .await?;
    Ok(category)
  }

  // ── Questions ─────────────────────────────────────────────────────────────

  async fn list_questions(&self) -> Result<Vec<Question>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, question, answer, category, difficulty
           FROM questions
           ORDER BY id",
        )?;
        let rows = stmt
          .query_map([], question_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
    // SQLite LIKE is case-insensitive over ASCII. The pattern is bound as a
    // parameter, so the term needs no escaping beyond that.
    let pattern = format!("%{term}%");
    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, question, answer, category, difficulty
           FROM questions
           WHERE question LIKE ?1
           ORDER BY id",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![pattern], question_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn questions_in_category(&self, category_id: i64) -> Result<Vec<Question>> {
    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, question, answer, category, difficulty
           FROM questions
           WHERE category = ?1
           ORDER BY id",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![category_id], question_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn add_question(&self, input: NewQuestion) -> Result<Question> {
    let question = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO questions (question, answer, category, difficulty)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![
            input.question,
            input.answer,
            input.category,
            input.difficulty,
          ],
        )?;
        Ok(Question {
          id:         conn.last_insert_rowid(),
          question:   input.question,
          answer:     input.answer,
          category:   input.category,
          difficulty: input.difficulty,
        })
      })
      .await?;
    Ok(question)
  }

  async fn delete_question(&self, id: i64) -> Result<bool> {
    let deleted = self
      .conn
      .call(move |conn| {
        let n = conn
          .execute("DELETE FROM questions WHERE id = ?1", rusqlite::params![id])?;
        Ok(n > 0)
      })
      .await?;
    Ok(deleted)
  }

  // ── Quiz ──────────────────────────────────────────────────────────────────

  async fn eligible_questions(
    &self,
    category_id: Option<i64>,
    excluded: &[i64],
  ) -> Result<Vec<Question>> {
    let excluded = excluded.to_vec();
    let rows = self
      .conn
      .call(move |conn| {
        // Build the WHERE clause dynamically: one placeholder per excluded
        // id, plus the optional category restriction. Every bound value is
        // an i64, so the parameter list stays homogeneous.
        let mut conds: Vec<String> = vec![];
        let mut params: Vec<i64> = vec![];

        if !excluded.is_empty() {
          let placeholders = vec!["?"; excluded.len()].join(", ");
          conds.push(format!("id NOT IN ({placeholders})"));
          params.extend_from_slice(&excluded);
        }
        if let Some(category) = category_id {
          conds.push("category = ?".to_owned());
          params.push(category);
        }

        let where_clause = if conds.is_empty() {
          String::new()
        } else {
          format!("WHERE {}", conds.join(" AND "))
        };

        let sql = format!(
          "SELECT id, question, answer, category, difficulty
           FROM questions
           {where_clause}
           ORDER BY id"
        );

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params.iter()), question_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }
}
