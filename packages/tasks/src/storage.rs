// ABOUTME: Task storage layer using SQLite
// ABOUTME: Handles CRUD operations for task records

use chrono::Local;
use sqlx::{Row, SqlitePool};
use thiserror::Error;
use tracing::debug;

use crate::types::{Task, TaskCreateInput};

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

pub struct TaskStorage {
    pool: SqlitePool,
}

impl TaskStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new task. The creation timestamp is set here, never taken
    /// from the input, and the id comes from the database's autoincrement
    /// counter so ids are monotonic and never reused.
    pub async fn create_task(&self, input: TaskCreateInput) -> StorageResult<Task> {
        debug!("Creating task '{}'", input.title);

        let created_at = Local::now().naive_local();

        let result = sqlx::query(
            r#"
            INSERT INTO tasks (title, description, done, created_at, completed_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.done)
        .bind(created_at)
        .bind(input.completed_at)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        Ok(Task {
            id: result.last_insert_rowid(),
            title: input.title,
            description: input.description,
            done: input.done,
            created_at,
            completed_at: input.completed_at,
        })
    }

    pub async fn list_tasks(&self) -> StorageResult<Vec<Task>> {
        debug!("Fetching all tasks");

        let rows = sqlx::query("SELECT * FROM tasks ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        rows.iter().map(row_to_task).collect()
    }

    pub async fn get_task(&self, task_id: i64) -> StorageResult<Option<Task>> {
        debug!("Fetching task: {}", task_id);

        let row = sqlx::query("SELECT * FROM tasks WHERE id = ?")
            .bind(task_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        row.as_ref().map(row_to_task).transpose()
    }

    /// Upsert by id. All six columns are written exactly as given, so the
    /// caller is responsible for carrying over id and created_at.
    pub async fn save_task(&self, task: &Task) -> StorageResult<Task> {
        debug!("Saving task: {}", task.id);

        sqlx::query(
            r#"
            INSERT OR REPLACE INTO tasks (id, title, description, done, created_at, completed_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(task.id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.done)
        .bind(task.created_at)
        .bind(task.completed_at)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        Ok(task.clone())
    }

    pub async fn task_exists(&self, task_id: i64) -> StorageResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM tasks WHERE id = ?)")
            .bind(task_id)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(exists)
    }

    /// Delete by id. A no-op when the id is absent.
    pub async fn delete_task(&self, task_id: i64) -> StorageResult<()> {
        debug!("Deleting task: {}", task_id);

        sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(task_id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(())
    }
}

fn row_to_task(row: &sqlx::sqlite::SqliteRow) -> StorageResult<Task> {
    Ok(Task {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        done: row.try_get("done")?,
        created_at: row.try_get("created_at")?,
        completed_at: row.try_get("completed_at")?,
    })
}
