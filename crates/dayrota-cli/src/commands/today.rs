//! Today-list commands: the daily top-up plus manual add and swap.

use chrono::NaiveDate;
use clap::Subcommand;
use dayrota_core::planner::manual;
use dayrota_core::{ensure_today_assignments, AppConfig, AssignedTask, SqliteStore, TaskStatus};
use serde::Serialize;

use super::{parse_date_arg, today_local};

#[derive(Subcommand)]
pub enum TodayAction {
    /// Fill today's list up to the daily quota
    Ensure,
    /// Show the assigned tasks for today
    Show {
        /// Show another date instead, YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
    },
    /// Manually assign a task to today
    Add {
        /// Task ID
        task_id: String,
    },
    /// Replace an assignment with another task, keeping its date
    Swap {
        /// Assignment ID to replace
        assignment_id: String,
        /// Replacement task ID
        task_id: String,
    },
    /// List open tasks that are not assigned anywhere yet
    Eligible,
}

#[derive(Serialize)]
struct TodayView {
    date: NaiveDate,
    tasks: Vec<AssignedTask>,
}

pub fn run(action: TodayAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    let store = SqliteStore::open()?;

    match action {
        TodayAction::Ensure => {
            let outcome = ensure_today_assignments(&store, &config.user_id, today_local())?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        TodayAction::Show { date } => {
            let date = match date {
                Some(s) => parse_date_arg(&s)?,
                None => today_local(),
            };
            let mut tasks = store.assigned_tasks(&config.user_id, date)?;
            // Stable sort: open tasks first, store order kept within each half.
            tasks.sort_by_key(|t| t.task.status == TaskStatus::Completed);
            let view = TodayView { date, tasks };
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        TodayAction::Add { task_id } => {
            let assignment =
                manual::assign_task_today(&store, &config.user_id, &task_id, today_local())?;
            println!("Assigned for {}: {}", assignment.date, assignment.id);
            println!("{}", serde_json::to_string_pretty(&assignment)?);
        }
        TodayAction::Swap {
            assignment_id,
            task_id,
        } => {
            let assignment =
                manual::swap_assignment(&store, &config.user_id, &assignment_id, &task_id)?;
            println!("Swapped in task {} for {}", assignment.task_id, assignment.date);
            println!("{}", serde_json::to_string_pretty(&assignment)?);
        }
        TodayAction::Eligible => {
            let tasks = manual::eligible_tasks(&store, &config.user_id)?;
            println!("{}", serde_json::to_string_pretty(&tasks)?);
        }
    }
    Ok(())
}
