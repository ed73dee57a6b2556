//! Integration tests for the Tasks domain
//!
//! These tests use real PostgreSQL via testcontainers to ensure:
//! - Database queries work correctly
//! - Store-assigned identifiers are monotonic
//! - Listing order is stable
//! - Delete is permanent

use domain_tasks::*;
use test_utils::{TestDataBuilder, TestDatabase};

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_task() {
    let db = TestDatabase::new().await;
    let repo = PgTaskRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_get");

    let input = CreateTask {
        title: builder.name("task", "main"),
    };

    // Create task
    let created = repo.create(input.clone()).await.unwrap();

    assert_eq!(created.title, input.title);
    assert_eq!(created.status, TaskStatus::Pending);
    assert!(created.id > 0);

    // Retrieve task
    let retrieved = repo.get_by_id(created.id).await.unwrap();
    let retrieved = retrieved.expect("task should exist");

    assert_eq!(retrieved.id, created.id);
    assert_eq!(retrieved.title, created.title);
    assert_eq!(retrieved.status, TaskStatus::Pending);
    assert_eq!(retrieved.created_at, created.created_at);
}

#[tokio::test]
async fn test_ids_are_monotonically_assigned() {
    let db = TestDatabase::new().await;
    let repo = PgTaskRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("monotonic_ids");

    let first = repo
        .create(CreateTask {
            title: builder.name("task", "first"),
        })
        .await
        .unwrap();
    let second = repo
        .create(CreateTask {
            title: builder.name("task", "second"),
        })
        .await
        .unwrap();

    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_list_returns_tasks_in_ascending_id_order() {
    let db = TestDatabase::new().await;
    let repo = PgTaskRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("list_order");

    for suffix in ["a", "b", "c"] {
        repo.create(CreateTask {
            title: builder.name("task", suffix),
        })
        .await
        .unwrap();
    }

    let tasks = repo.list().await.unwrap();

    assert_eq!(tasks.len(), 3);
    assert!(tasks.windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(tasks[0].title, builder.name("task", "a"));
    assert_eq!(tasks[2].title, builder.name("task", "c"));
}

#[tokio::test]
async fn test_list_empty_store_is_not_an_error() {
    let db = TestDatabase::new().await;
    let repo = PgTaskRepository::new(db.connection());

    let tasks = repo.list().await.unwrap();
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn test_get_missing_task_returns_none() {
    let db = TestDatabase::new().await;
    let repo = PgTaskRepository::new(db.connection());

    let result = repo.get_by_id(999_999).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_update_changes_title_and_status_only() {
    let db = TestDatabase::new().await;
    let repo = PgTaskRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("update_fields");

    let created = repo
        .create(CreateTask {
            title: builder.name("task", "original"),
        })
        .await
        .unwrap();

    let updated = repo
        .update(
            created.id,
            UpdateTask {
                title: Some(builder.name("task", "renamed")),
                status: Some(TaskStatus::Done),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, builder.name("task", "renamed"));
    assert_eq!(updated.status, TaskStatus::Done);
    assert_eq!(updated.created_at, created.created_at);

    // Changes are persisted
    let retrieved = repo.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(retrieved.title, builder.name("task", "renamed"));
    assert_eq!(retrieved.status, TaskStatus::Done);
}

#[tokio::test]
async fn test_update_with_absent_fields_keeps_stored_values() {
    let db = TestDatabase::new().await;
    let repo = PgTaskRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("update_partial");

    let created = repo
        .create(CreateTask {
            title: builder.name("task", "keep-me"),
        })
        .await
        .unwrap();

    // Only status provided: title must stay untouched
    let updated = repo
        .update(
            created.id,
            UpdateTask {
                title: None,
                status: Some(TaskStatus::Done),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, builder.name("task", "keep-me"));
    assert_eq!(updated.status, TaskStatus::Done);
}

#[tokio::test]
async fn test_status_can_transition_back_to_pending() {
    let db = TestDatabase::new().await;
    let repo = PgTaskRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("status_back");

    let created = repo
        .create(CreateTask {
            title: builder.name("task", "flip"),
        })
        .await
        .unwrap();

    repo.update(
        created.id,
        UpdateTask {
            title: None,
            status: Some(TaskStatus::Done),
        },
    )
    .await
    .unwrap();

    let reverted = repo
        .update(
            created.id,
            UpdateTask {
                title: None,
                status: Some(TaskStatus::Pending),
            },
        )
        .await
        .unwrap();

    assert_eq!(reverted.status, TaskStatus::Pending);
}

#[tokio::test]
async fn test_update_missing_task_is_not_found() {
    let db = TestDatabase::new().await;
    let repo = PgTaskRepository::new(db.connection());

    let result = repo
        .update(
            424_242,
            UpdateTask {
                title: Some("ghost".to_string()),
                status: None,
            },
        )
        .await;

    assert!(matches!(result, Err(TaskError::NotFound(424_242))));
}

#[tokio::test]
async fn test_delete_is_permanent_and_not_idempotent() {
    let db = TestDatabase::new().await;
    let repo = PgTaskRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("delete_permanent");

    let created = repo
        .create(CreateTask {
            title: builder.name("task", "doomed"),
        })
        .await
        .unwrap();

    // First delete removes the row
    assert!(repo.delete(created.id).await.unwrap());
    assert!(repo.get_by_id(created.id).await.unwrap().is_none());

    // Second delete finds nothing
    assert!(!repo.delete(created.id).await.unwrap());
}

// ============================================================================
// Service Tests (against the real store)
// ============================================================================

#[tokio::test]
async fn test_service_rejects_blank_title_without_persisting() {
    let db = TestDatabase::new().await;
    let repo = PgTaskRepository::new(db.connection());
    let service = TaskService::new(repo);

    let result = service
        .create_task(CreateTask {
            title: "   ".to_string(),
        })
        .await;
    assert!(matches!(result, Err(TaskError::Validation(_))));

    // Nothing reached the store
    let tasks = service.list_tasks().await.unwrap();
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn test_service_get_after_delete_is_not_found() {
    let db = TestDatabase::new().await;
    let repo = PgTaskRepository::new(db.connection());
    let service = TaskService::new(repo);

    let created = service
        .create_task(CreateTask {
            title: "short-lived".to_string(),
        })
        .await
        .unwrap();

    service.delete_task(created.id).await.unwrap();

    let get_result = service.get_task(created.id).await;
    assert!(matches!(get_result, Err(TaskError::NotFound(_))));

    let second_delete = service.delete_task(created.id).await;
    assert!(matches!(second_delete, Err(TaskError::NotFound(_))));
}

#[tokio::test]
async fn test_service_full_lifecycle() {
    let db = TestDatabase::new().await;
    let repo = PgTaskRepository::new(db.connection());
    let service = TaskService::new(repo);

    // Create
    let created = service
        .create_task(CreateTask {
            title: "Buy milk".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(created.status, TaskStatus::Pending);

    // Update to done
    let updated = service
        .update_task(
            created.id,
            UpdateTask {
                title: Some("Buy milk".to_string()),
                status: Some(TaskStatus::Done),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, TaskStatus::Done);

    // List shows the single task as done
    let tasks = service.list_tasks().await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].status, TaskStatus::Done);

    // Delete, then the task is gone
    service.delete_task(created.id).await.unwrap();
    assert!(matches!(
        service.get_task(created.id).await,
        Err(TaskError::NotFound(_))
    ));
}
