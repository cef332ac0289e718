// ABOUTME: HTTP API layer for Taskdeck providing REST endpoints and routing
// ABOUTME: Maps task store results to HTTP responses

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

pub mod db;
pub mod response;
pub mod tasks_handlers;

pub use db::DbState;

/// Creates the tasks API router (nested under /tasks by the binary)
pub fn create_tasks_router() -> Router<DbState> {
    Router::new()
        .route("/", get(tasks_handlers::list_tasks))
        .route("/", post(tasks_handlers::create_task))
        .route("/{id}", get(tasks_handlers::get_task))
        .route("/{id}", put(tasks_handlers::update_task))
        .route("/{id}", delete(tasks_handlers::delete_task))
        .route("/{id}/done", patch(tasks_handlers::mark_task_done))
}
