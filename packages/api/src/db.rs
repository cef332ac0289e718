// ABOUTME: Database connection management and storage initialization
// ABOUTME: Provides shared access to the SQLite pool and task storage

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::sync::Arc;
use tracing::{debug, info};

use taskdeck_tasks::storage::{StorageError, TaskStorage};

/// Shared database state for API handlers
#[derive(Clone)]
pub struct DbState {
    pub pool: SqlitePool,
    pub task_storage: Arc<TaskStorage>,
}

impl DbState {
    /// Create new database state from a SQLite pool
    pub fn new(pool: SqlitePool) -> Self {
        let task_storage = Arc::new(TaskStorage::new(pool.clone()));
        Self { pool, task_storage }
    }

    /// Initialize database state with an optional custom database path
    pub async fn init_with_path(
        database_path: Option<std::path::PathBuf>,
    ) -> Result<Self, StorageError> {
        let database_path =
            database_path.unwrap_or_else(|| std::path::PathBuf::from("taskdeck.db"));

        // Ensure parent directory exists
        if let Some(parent) = database_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(StorageError::Io)?;
            }
        }

        let database_url = format!("sqlite:{}?mode=rwc", database_path.display());

        debug!("Connecting to database: {}", database_url);

        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect(&database_url)
            .await
            .map_err(StorageError::Sqlx)?;

        sqlx::query("PRAGMA journal_mode = WAL")
            .execute(&pool)
            .await
            .map_err(StorageError::Sqlx)?;

        sqlx::query("PRAGMA foreign_keys = ON")
            .execute(&pool)
            .await
            .map_err(StorageError::Sqlx)?;

        sqlx::query("PRAGMA synchronous = NORMAL")
            .execute(&pool)
            .await
            .map_err(StorageError::Sqlx)?;

        info!("Database connection established");

        sqlx::migrate!("../tasks/migrations")
            .run(&pool)
            .await
            .map_err(StorageError::Migration)?;

        debug!("Database migrations completed");

        Ok(Self::new(pool))
    }
}
