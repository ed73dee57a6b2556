use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task, UpdateTask};
use crate::repository::TaskRepository;

/// Service layer for Task business logic
#[derive(Clone)]
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all tasks, ordered by ascending ID
    pub async fn list_tasks(&self) -> TaskResult<Vec<Task>> {
        self.repository.list().await
    }

    /// Create a new task with validation
    ///
    /// The title is trimmed before storage; a title that is empty after
    /// trimming never reaches the repository.
    #[instrument(skip(self, input), fields(task_title = %input.title))]
    pub async fn create_task(&self, input: CreateTask) -> TaskResult<Task> {
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        let title = input.title.trim();
        if title.is_empty() {
            return Err(TaskError::Validation(
                "title must not be empty".to_string(),
            ));
        }

        self.repository
            .create(CreateTask {
                title: title.to_string(),
            })
            .await
    }

    /// Get a task by ID
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn get_task(&self, id: i32) -> TaskResult<Task> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))
    }

    /// Update a task
    ///
    /// Fields absent from the input keep their stored values. A provided
    /// title must be non-empty after trimming.
    #[instrument(skip(self, input), fields(task_id = %id))]
    pub async fn update_task(&self, id: i32, input: UpdateTask) -> TaskResult<Task> {
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        let title = match input.title {
            Some(title) => {
                let trimmed = title.trim();
                if trimmed.is_empty() {
                    return Err(TaskError::Validation(
                        "title must not be empty".to_string(),
                    ));
                }
                Some(trimmed.to_string())
            }
            None => None,
        };

        self.repository
            .update(
                id,
                UpdateTask {
                    title,
                    status: input.status,
                },
            )
            .await
    }

    /// Delete a task
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn delete_task(&self, id: i32) -> TaskResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(TaskError::NotFound(id));
        }

        Ok(())
    }
}
