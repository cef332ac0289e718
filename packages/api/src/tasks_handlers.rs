// ABOUTME: HTTP request handlers for task operations
// ABOUTME: CRUD plus mark-done over the /tasks collection

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Local, NaiveDateTime};
use serde::Deserialize;
use tracing::info;

use crate::db::DbState;
use crate::response::ApiError;
use taskdeck_tasks::{TaskCreateInput, TaskUpdateInput};

/// Request body for creating a task
#[derive(Deserialize)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub done: bool,
    #[serde(rename = "completedAt")]
    pub completed_at: Option<NaiveDateTime>,
}

/// Request body for updating a task
#[derive(Deserialize)]
pub struct UpdateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub done: bool,
    #[serde(rename = "completedAt")]
    pub completed_at: Option<NaiveDateTime>,
}

/// Create a new task
pub async fn create_task(
    State(db): State<DbState>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let title = request.title.unwrap_or_default();
    if title.trim().is_empty() {
        return Err(ApiError::Validation("title must not be blank".to_string()));
    }

    info!("Creating task '{}'", title);

    let input = TaskCreateInput {
        title,
        description: request.description,
        done: request.done,
        completed_at: request.completed_at,
    };

    let task = db.task_storage.create_task(input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// List all tasks
pub async fn list_tasks(State(db): State<DbState>) -> Result<impl IntoResponse, ApiError> {
    info!("Listing tasks");

    let tasks = db.task_storage.list_tasks().await?;
    Ok(Json(tasks))
}

/// Get a single task by id
pub async fn get_task(
    State(db): State<DbState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Getting task: {}", id);

    let task = db.task_storage.get_task(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(task))
}

/// Update an existing task. Overwrites title, description, done, and
/// completedAt from the payload; id and createdAt are never client-supplied.
pub async fn update_task(
    State(db): State<DbState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateTaskRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Updating task: {}", id);

    let mut task = db.task_storage.get_task(id).await?.ok_or(ApiError::NotFound)?;

    task.apply_update(TaskUpdateInput {
        title: request.title,
        description: request.description,
        done: request.done,
        completed_at: request.completed_at,
    });

    let saved = db.task_storage.save_task(&task).await?;
    Ok(Json(saved))
}

/// Mark a task as done, stamping the completion time. Any request body is
/// ignored.
pub async fn mark_task_done(
    State(db): State<DbState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Marking task as done: {}", id);

    let mut task = db.task_storage.get_task(id).await?.ok_or(ApiError::NotFound)?;

    task.done = true;
    task.completed_at = Some(Local::now().naive_local());

    let saved = db.task_storage.save_task(&task).await?;
    Ok(Json(saved))
}

/// Delete a task
pub async fn delete_task(
    State(db): State<DbState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Deleting task: {}", id);

    if !db.task_storage.task_exists(id).await? {
        return Err(ApiError::NotFound);
    }

    db.task_storage.delete_task(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
