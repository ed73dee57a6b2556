use async_trait::async_trait;

use crate::error::TaskResult;
use crate::models::{CreateTask, Task, UpdateTask};

/// Repository trait for Task persistence
///
/// This trait defines the data access interface for tasks.
/// Implementations can use different storage backends (PostgreSQL, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Create a new task
    async fn create(&self, input: CreateTask) -> TaskResult<Task>;

    /// Get a task by ID
    async fn get_by_id(&self, id: i32) -> TaskResult<Option<Task>>;

    /// List all tasks, ordered by ascending ID
    async fn list(&self) -> TaskResult<Vec<Task>>;

    /// Update an existing task
    async fn update(&self, id: i32, input: UpdateTask) -> TaskResult<Task>;

    /// Delete a task by ID, returning whether it existed
    async fn delete(&self, id: i32) -> TaskResult<bool>;
}
