//! Project management commands.

use chrono::Utc;
use clap::Subcommand;
use dayrota_core::{AppConfig, Project, SqliteStore, TaskStatus};
use serde::Serialize;
use uuid::Uuid;

use super::{parse_date_arg, parse_project_type};

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Create a project without going through plan intake
    Add {
        /// Project title
        title: String,
        /// Due date, YYYY-MM-DD
        #[arg(long)]
        due: Option<String>,
        /// Priority 1-5, 5 most urgent (default: 3)
        #[arg(long, default_value = "3")]
        priority: u8,
        /// Project type: work, study or life (default: work)
        #[arg(long, default_value = "work")]
        project_type: String,
    },
    /// List projects with their task progress
    List,
}

/// A project row plus completion counters for list output.
#[derive(Serialize)]
struct ProjectView {
    #[serde(flatten)]
    project: Project,
    tasks_total: usize,
    tasks_completed: usize,
    progress_percent: u8,
}

pub fn run(action: ProjectAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    let store = SqliteStore::open()?;

    match action {
        ProjectAction::Add {
            title,
            due,
            priority,
            project_type,
        } => {
            if !(1..=5).contains(&priority) {
                return Err(format!("priority must be between 1 and 5, got {priority}").into());
            }
            let project = Project {
                id: Uuid::new_v4().to_string(),
                user_id: config.user_id.clone(),
                title,
                due_date: due.map(|s| parse_date_arg(&s)).transpose()?,
                priority,
                project_type: parse_project_type(&project_type)?,
                created_at: Utc::now(),
            };
            store.create_project(&project)?;
            println!("Project created: {}", project.id);
            println!("{}", serde_json::to_string_pretty(&project)?);
        }
        ProjectAction::List => {
            let mut views = Vec::new();
            for project in store.list_projects(&config.user_id)? {
                let tasks = store.list_tasks(&config.user_id, Some(&project.id))?;
                let tasks_total = tasks.len();
                let tasks_completed = tasks
                    .iter()
                    .filter(|t| t.status == TaskStatus::Completed)
                    .count();
                let progress_percent = if tasks_total == 0 {
                    0
                } else {
                    (tasks_completed * 100 / tasks_total) as u8
                };
                views.push(ProjectView {
                    project,
                    tasks_total,
                    tasks_completed,
                    progress_percent,
                });
            }
            println!("{}", serde_json::to_string_pretty(&views)?);
        }
    }
    Ok(())
}
