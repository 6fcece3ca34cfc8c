use chrono::Utc;
use rusqlite::params;
use tracing::instrument;

use tally_core::{Todo, TodoId, TodoPatch};

use crate::database::Database;
use crate::error::StoreError;

fn row_to_todo(row: &rusqlite::Row<'_>) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: TodoId::from_raw(row.get::<_, String>(0)?),
        content: row.get(1)?,
        completed: row.get::<_, i64>(2)? != 0,
        created_at: row.get(3)?,
    })
}

/// CRUD over the `todos` table. The store is the sole owner of record
/// lifetime; callers get transient copies.
pub struct TodoRepo {
    db: Database,
}

impl TodoRepo {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// List all todos, newest first. Ids are time-ordered (uuid v7), so they
    /// break ties between rows created within the same timestamp.
    #[instrument(skip(self))]
    pub fn list(&self) -> Result<Vec<Todo>, StoreError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, content, completed, created_at FROM todos \
                 ORDER BY created_at DESC, id DESC",
            )?;
            let rows = stmt
                .query_map([], row_to_todo)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// Insert a new todo. Content is trimmed; empty content is rejected
    /// before touching the database.
    #[instrument(skip(self))]
    pub fn create(&self, content: &str) -> Result<Todo, StoreError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(StoreError::InvalidInput("content is required".into()));
        }

        let todo = Todo {
            id: TodoId::new(),
            content: content.to_string(),
            completed: false,
            created_at: Utc::now().to_rfc3339(),
        };

        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO todos (id, content, completed, created_at) VALUES (?1, ?2, ?3, ?4)",
                params![
                    todo.id.as_str(),
                    todo.content,
                    todo.completed as i64,
                    todo.created_at
                ],
            )?;
            Ok(())
        })?;

        Ok(todo)
    }

    /// Apply a partial update. Last write wins; a missing row is a no-op,
    /// matching the hosted-store semantics this replaces.
    #[instrument(skip(self, patch), fields(todo_id = %id))]
    pub fn update(&self, id: &TodoId, patch: &TodoPatch) -> Result<(), StoreError> {
        if patch.is_empty() {
            return Ok(());
        }

        let content = match &patch.content {
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(StoreError::InvalidInput("content cannot be empty".into()));
                }
                Some(trimmed.to_string())
            }
            None => None,
        };

        self.db.with_conn(|conn| {
            match (&content, patch.completed) {
                (Some(c), Some(done)) => {
                    conn.execute(
                        "UPDATE todos SET content = ?1, completed = ?2 WHERE id = ?3",
                        params![c, done as i64, id.as_str()],
                    )?;
                }
                (Some(c), None) => {
                    conn.execute(
                        "UPDATE todos SET content = ?1 WHERE id = ?2",
                        params![c, id.as_str()],
                    )?;
                }
                (None, Some(done)) => {
                    conn.execute(
                        "UPDATE todos SET completed = ?1 WHERE id = ?2",
                        params![done as i64, id.as_str()],
                    )?;
                }
                (None, None) => unreachable!("empty patch handled above"),
            }
            Ok(())
        })
    }

    /// Delete a todo. Deleting an id that does not exist is a no-op.
    #[instrument(skip(self), fields(todo_id = %id))]
    pub fn delete(&self, id: &TodoId) -> Result<(), StoreError> {
        self.db.with_conn(|conn| {
            conn.execute("DELETE FROM todos WHERE id = ?1", [id.as_str()])?;
            Ok(())
        })
    }

    /// Fetch a single todo by id.
    #[instrument(skip(self), fields(todo_id = %id))]
    pub fn get(&self, id: &TodoId) -> Result<Todo, StoreError> {
        self.db.with_conn(|conn| {
            conn.query_row(
                "SELECT id, content, completed, created_at FROM todos WHERE id = ?1",
                [id.as_str()],
                row_to_todo,
            )
            .map_err(|_| StoreError::NotFound(format!("todo {id}")))
        })
    }
}
