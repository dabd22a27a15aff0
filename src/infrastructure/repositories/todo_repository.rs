//! Todo Repository Implementation
//!
//! SQLite implementation of the TodoRepository trait.
//! `completed` is stored as a 0/1 INTEGER; the bool mapping happens here and
//! nowhere else.

use std::future::Future;
use std::time::Instant;

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::{RepositoryError, Todo, TodoRepository};
use crate::infrastructure::metrics;

const TABLE: &str = "todos";

/// Database row representation matching the todos table schema.
#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
    id: i64,
    name: String,
    description: String,
    completed: i64,
}

impl TodoRow {
    /// Convert database row to domain Todo entity.
    fn into_todo(self) -> Todo {
        Todo {
            id: self.id,
            name: self.name,
            description: self.description,
            completed: self.completed != 0,
        }
    }
}

fn completed_flag(completed: bool) -> i64 {
    i64::from(completed)
}

/// Log a storage fault where it happens and collapse it to `Internal`.
fn storage_error(operation: &'static str, id: Option<i64>, err: sqlx::Error) -> RepositoryError {
    tracing::error!(operation, todo_id = ?id, error = %err, "Todo storage failure");
    RepositoryError::Internal(format!("{operation} failed: {err}"))
}

async fn timed<T>(operation: &'static str, query: impl Future<Output = T>) -> T {
    let start = Instant::now();
    let output = query.await;
    metrics::record_db_query(operation, TABLE, start.elapsed().as_secs_f64());
    output
}

/// SQLite todo repository implementation.
///
/// Takes its pool by constructor so tests can hand in an in-memory database.
#[derive(Clone)]
pub struct SqliteTodoRepository {
    pool: SqlitePool,
}

impl SqliteTodoRepository {
    /// Create a new SqliteTodoRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn list_all(&self) -> Result<Vec<Todo>, RepositoryError> {
        let rows = timed(
            "list_all",
            sqlx::query_as::<_, TodoRow>(
                r#"
                SELECT id, name, description, completed
                FROM todos
                ORDER BY id
                "#,
            )
            .fetch_all(&self.pool),
        )
        .await
        .map_err(|e| storage_error("list_all", None, e))?;

        tracing::debug!(count = rows.len(), "Fetched todos");
        Ok(rows.into_iter().map(TodoRow::into_todo).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Todo, RepositoryError> {
        let row = timed(
            "get_by_id",
            sqlx::query_as::<_, TodoRow>(
                "SELECT id, name, description, completed FROM todos WHERE id = ?",
            )
            .bind(id)
            .fetch_optional(&self.pool),
        )
        .await
        .map_err(|e| storage_error("get_by_id", Some(id), e))?;

        match row {
            Some(row) => Ok(row.into_todo()),
            None => {
                tracing::debug!(todo_id = id, "Todo not found");
                Err(RepositoryError::NotFound)
            }
        }
    }

    async fn create(&self, todo: &mut Todo) -> Result<(), RepositoryError> {
        let result = timed(
            "create",
            sqlx::query("INSERT INTO todos (name, description, completed) VALUES (?, ?, ?)")
                .bind(&todo.name)
                .bind(&todo.description)
                .bind(completed_flag(todo.completed))
                .execute(&self.pool),
        )
        .await
        .map_err(|e| storage_error("create", None, e))?;

        if result.rows_affected() == 0 {
            tracing::error!(name = %todo.name, "No rows affected on insert");
            return Err(RepositoryError::Internal("insert affected no rows".into()));
        }

        let id = result.last_insert_rowid();
        if id <= 0 {
            tracing::error!(name = %todo.name, "Insert did not yield a row id");
            return Err(RepositoryError::Internal("missing row id after insert".into()));
        }

        todo.id = id;
        tracing::info!(todo_id = id, "Todo created");
        Ok(())
    }

    async fn update(&self, todo: &Todo) -> Result<Todo, RepositoryError> {
        let result = timed(
            "update",
            sqlx::query(
                r#"
                UPDATE todos
                SET name = ?, description = ?, completed = ?
                WHERE id = ?
                "#,
            )
            .bind(&todo.name)
            .bind(&todo.description)
            .bind(completed_flag(todo.completed))
            .bind(todo.id)
            .execute(&self.pool),
        )
        .await
        .map_err(|e| storage_error("update", Some(todo.id), e))?;

        if result.rows_affected() == 0 {
            tracing::debug!(todo_id = todo.id, "Todo not found for update");
            return Err(RepositoryError::NotFound);
        }

        tracing::info!(todo_id = todo.id, "Todo updated");
        Ok(todo.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = timed(
            "delete",
            sqlx::query("DELETE FROM todos WHERE id = ?")
                .bind(id)
                .execute(&self.pool),
        )
        .await
        .map_err(|e| storage_error("delete", Some(id), e))?;

        if result.rows_affected() == 0 {
            tracing::debug!(todo_id = id, "Todo not found for delete");
            return Err(RepositoryError::NotFound);
        }

        tracing::info!(todo_id = id, "Todo deleted");
        Ok(())
    }
}
