//! Plan intake.
//!
//! The decomposition service replies with a project title and an
//! ordered task array. This module turns that payload, plus the
//! attributes the user picked (due date, priority, type), into one
//! stored project and its tasks. Tasks keep the array order as
//! `order_index` 1..=n and start out pending, so the daily planner
//! can rank them immediately.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, ValidationError};
use crate::store::SqliteStore;
use crate::task::{Project, ProjectType, Task, TaskStatus};

/// One task in a decomposition reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedTask {
    pub task_title: String,
    /// Newline-separated "- " bullets, possibly empty
    #[serde(default)]
    pub subtasks_text: String,
}

/// The decomposition service's reply shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    /// Language the plan was written in (informational)
    #[serde(default)]
    pub language: Option<String>,
    pub project_title: String,
    pub tasks: Vec<PlannedTask>,
}

/// User-chosen attributes for the imported project.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    pub due_date: Option<NaiveDate>,
    pub priority: u8,
    pub project_type: ProjectType,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            due_date: None,
            priority: 3,
            project_type: ProjectType::Work,
        }
    }
}

fn validate(plan: &PlanResponse, options: &ImportOptions) -> Result<(), ValidationError> {
    if plan.project_title.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "project_title".into(),
            message: "must not be blank".into(),
        });
    }
    if plan.tasks.is_empty() {
        return Err(ValidationError::EmptyCollection("tasks".into()));
    }
    if plan.tasks.iter().any(|t| t.task_title.trim().is_empty()) {
        return Err(ValidationError::InvalidValue {
            field: "tasks".into(),
            message: "task titles must not be blank".into(),
        });
    }
    if !(1..=5).contains(&options.priority) {
        return Err(ValidationError::InvalidValue {
            field: "priority".into(),
            message: format!("must be between 1 and 5, got {}", options.priority),
        });
    }
    Ok(())
}

/// Store a decomposition reply as a project with its tasks.
///
/// The project and all tasks are written in one transaction.
///
/// # Errors
///
/// Returns a validation error for a blank project title, an empty or
/// blank-titled task list, or an out-of-range priority; storage
/// failures pass through.
pub fn import_plan(
    store: &SqliteStore,
    user_id: &str,
    plan: &PlanResponse,
    options: &ImportOptions,
) -> Result<Project, CoreError> {
    validate(plan, options)?;

    let now = Utc::now();
    let project = Project {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        title: plan.project_title.trim().to_string(),
        due_date: options.due_date,
        priority: options.priority,
        project_type: options.project_type,
        created_at: now,
    };

    let tasks: Vec<Task> = plan
        .tasks
        .iter()
        .enumerate()
        .map(|(index, planned)| Task {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            project_id: project.id.clone(),
            order_index: index as i64 + 1,
            title: planned.task_title.trim().to_string(),
            subtasks_text: planned.subtasks_text.clone(),
            status: TaskStatus::Pending,
            total_minutes: 0,
            completed_at: None,
            created_at: now,
        })
        .collect();

    store.create_project_with_tasks(&project, &tasks)?;
    tracing::debug!("imported plan '{}' with {} tasks", project.title, tasks.len());
    Ok(project)
}
