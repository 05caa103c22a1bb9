//! Task management commands.

use chrono::Utc;
use clap::Subcommand;
use dayrota_core::{AppConfig, SqliteStore, Task, TaskStatus};
use uuid::Uuid;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Append a task to a project
    Add {
        /// Project ID
        project_id: String,
        /// Task title
        title: String,
        /// Newline-separated sub-step bullets
        #[arg(long)]
        subtasks: Option<String>,
    },
    /// List tasks
    List {
        /// Filter by project ID
        #[arg(long)]
        project_id: Option<String>,
        /// Filter by status: pending, in_progress or completed
        #[arg(long)]
        status: Option<String>,
    },
    /// Mark a task in progress
    Start {
        /// Task ID
        id: String,
    },
    /// Mark a task completed
    Done {
        /// Task ID
        id: String,
    },
}

fn status_label(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "pending",
        TaskStatus::InProgress => "in_progress",
        TaskStatus::Completed => "completed",
    }
}

fn parse_status_arg(s: &str) -> Result<TaskStatus, String> {
    match s.to_ascii_lowercase().as_str() {
        "pending" => Ok(TaskStatus::Pending),
        "in_progress" => Ok(TaskStatus::InProgress),
        "completed" => Ok(TaskStatus::Completed),
        _ => Err(format!(
            "invalid status '{s}', expected pending, in_progress or completed"
        )),
    }
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    let store = SqliteStore::open()?;

    match action {
        TaskAction::Add {
            project_id,
            title,
            subtasks,
        } => {
            let project = store
                .get_project(&project_id)?
                .filter(|p| p.user_id == config.user_id)
                .ok_or(format!("Project not found: {project_id}"))?;
            let task = Task {
                id: Uuid::new_v4().to_string(),
                user_id: config.user_id.clone(),
                project_id: project.id.clone(),
                order_index: store.next_order_index(&project.id)?,
                title,
                subtasks_text: subtasks.unwrap_or_default(),
                status: TaskStatus::Pending,
                total_minutes: 0,
                completed_at: None,
                created_at: Utc::now(),
            };
            store.create_task(&task)?;
            println!("Task created: {}", task.id);
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::List { project_id, status } => {
            let mut tasks = store.list_tasks(&config.user_id, project_id.as_deref())?;
            if let Some(status) = status {
                let wanted = parse_status_arg(&status)?;
                tasks.retain(|t| t.status == wanted);
            }
            println!("{}", serde_json::to_string_pretty(&tasks)?);
        }
        TaskAction::Start { id } => {
            let mut task = store.get_task(&id)?.ok_or(format!("Task not found: {id}"))?;
            if !task.status.can_transition_to(&TaskStatus::InProgress) {
                return Err(
                    format!("cannot start task in status '{}'", status_label(task.status)).into(),
                );
            }
            task.status = TaskStatus::InProgress;
            store.set_task_status(&task.id, task.status, None)?;
            println!("Task started: {id}");
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::Done { id } => {
            let mut task = store.get_task(&id)?.ok_or(format!("Task not found: {id}"))?;
            if !task.status.can_transition_to(&TaskStatus::Completed) {
                return Err(format!(
                    "cannot complete task in status '{}'",
                    status_label(task.status)
                )
                .into());
            }
            task.status = TaskStatus::Completed;
            task.completed_at = Some(Utc::now());
            store.set_task_status(&task.id, task.status, task.completed_at)?;
            println!("Task completed: {id}");
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
    }
    Ok(())
}
