use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use validator::Validate;

/// Task status
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "task_status")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TaskStatus {
    /// Task not finished yet
    #[default]
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Task completed
    #[sea_orm(string_value = "done")]
    Done,
}

/// Task entity - a titled to-do item with completion status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Store-assigned identifier, unique and monotonically increasing
    pub id: i32,
    /// Task title
    pub title: String,
    /// Task status
    pub status: TaskStatus,
    /// Creation timestamp, assigned once by the store
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new task
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTask {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
}

/// DTO for updating an existing task
///
/// Fields left out of the request keep their stored values; there is no way
/// to blank out a title through this type.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema, Default)]
pub struct UpdateTask {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    pub status: Option<TaskStatus>,
}

/// Response body confirming a deletion
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteConfirmation {
    pub message: String,
}

impl Task {
    /// Apply updates from UpdateTask DTO (absent fields keep stored values)
    pub fn apply_update(&mut self, update: UpdateTask) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        Task {
            id: 1,
            title: "Buy milk".to_string(),
            status: TaskStatus::Pending,
            created_at: "2026-01-01T00:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_task_serializes_with_camel_case_timestamp() {
        let json = serde_json::to_value(sample_task()).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Buy milk");
        assert_eq!(json["status"], "pending");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(TaskStatus::Pending).unwrap(),
            serde_json::json!("pending")
        );
        assert_eq!(
            serde_json::to_value(TaskStatus::Done).unwrap(),
            serde_json::json!("done")
        );
    }

    #[test]
    fn test_status_rejects_unknown_value() {
        // Only the two enum values ever deserialize; arbitrary strings are
        // rejected at the boundary instead of being stored verbatim.
        let result: Result<TaskStatus, _> = serde_json::from_str("\"archived\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_update_merges_both_fields() {
        let mut task = sample_task();
        task.apply_update(UpdateTask {
            title: Some("Buy oat milk".to_string()),
            status: Some(TaskStatus::Done),
        });

        assert_eq!(task.title, "Buy oat milk");
        assert_eq!(task.status, TaskStatus::Done);
        assert_eq!(task.id, 1);
    }

    #[test]
    fn test_apply_update_keeps_absent_fields() {
        let mut task = sample_task();
        let created_at = task.created_at;

        task.apply_update(UpdateTask::default());

        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.created_at, created_at);
    }

    #[test]
    fn test_apply_update_status_can_go_back_to_pending() {
        let mut task = sample_task();
        task.status = TaskStatus::Done;

        task.apply_update(UpdateTask {
            title: None,
            status: Some(TaskStatus::Pending),
        });

        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn test_update_task_deserializes_partial_body() {
        let update: UpdateTask = serde_json::from_str("{\"status\": \"done\"}").unwrap();
        assert!(update.title.is_none());
        assert_eq!(update.status, Some(TaskStatus::Done));
    }
}
