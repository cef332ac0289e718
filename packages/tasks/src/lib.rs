// ABOUTME: Task domain package
// ABOUTME: Provides types and SQLite-backed storage for task records

pub mod storage;
pub mod types;


pub use storage::*;
pub use types::*;
