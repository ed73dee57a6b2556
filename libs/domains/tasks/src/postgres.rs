use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::{TaskError, TaskResult},
    models::{CreateTask, Task, UpdateTask},
    repository::TaskRepository,
};

pub struct PgTaskRepository {
    db: DatabaseConnection,
}

impl PgTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn create(&self, input: CreateTask) -> TaskResult<Task> {
        // Convert CreateTask to ActiveModel; id/created_at are store-assigned
        let active_model: entity::ActiveModel = input.into();

        let model = active_model.insert(&self.db).await?;

        tracing::info!(task_id = model.id, "Created task");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> TaskResult<Option<Task>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;

        Ok(model.map(|m| m.into()))
    }

    async fn list(&self) -> TaskResult<Vec<Task>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, id: i32, input: UpdateTask) -> TaskResult<Task> {
        // Fetch existing task; absent fields in the input keep stored values
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(TaskError::NotFound(id))?;

        let created_at = model.created_at;
        let mut task: Task = model.into();
        task.apply_update(input);

        let active_model = entity::ActiveModel {
            id: Set(task.id),
            title: Set(task.title.clone()),
            status: Set(task.status),
            created_at: Set(created_at),
        };

        let updated_model = active_model.update(&self.db).await?;

        tracing::info!(task_id = id, "Updated task");
        Ok(updated_model.into())
    }

    async fn delete(&self, id: i32) -> TaskResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(task_id = id, "Deleted task");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
