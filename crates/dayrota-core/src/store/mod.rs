mod config;
pub mod sqlite;

pub use config::AppConfig;
pub use sqlite::SqliteStore;

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::StoreError;
use crate::prefs::Preferences;
use crate::task::{Assignment, TaskStatus, TaskWithProject};

/// Result of a batched assignment insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// Every row in the batch was written.
    Inserted,
    /// A task in the batch was already assigned; nothing was written.
    DuplicateTask,
}

/// Storage operations the planner and blocking logic depend on.
///
/// [`SqliteStore`] is the production implementation; tests substitute
/// doubles to exercise race and failure paths.
pub trait PlannerStore {
    /// Stored preferences for a user, if any.
    fn preferences(&self, user_id: &str) -> Result<Option<Preferences>, StoreError>;

    /// Open tasks (pending or in progress) joined with their projects,
    /// in stable fetch order.
    fn candidate_tasks(&self, user_id: &str) -> Result<Vec<TaskWithProject>, StoreError>;

    /// Assignments for a user, optionally restricted to one date.
    fn assignments(
        &self,
        user_id: &str,
        date: Option<NaiveDate>,
    ) -> Result<Vec<Assignment>, StoreError>;

    /// Assignments referencing any of the given tasks, on any date.
    fn assignments_for_tasks(&self, task_ids: &[String]) -> Result<Vec<Assignment>, StoreError>;

    /// Write a batch of assignments atomically.
    fn insert_assignments(&self, rows: &[Assignment]) -> Result<InsertOutcome, StoreError>;

    /// Current status of each task that exists; missing ids are absent
    /// from the map.
    fn task_statuses(&self, task_ids: &[String])
        -> Result<HashMap<String, TaskStatus>, StoreError>;

    /// Delete one assignment owned by the user and return the deleted
    /// row.
    fn delete_assignment(
        &self,
        user_id: &str,
        assignment_id: &str,
    ) -> Result<Assignment, StoreError>;
}

/// Returns `~/.config/dayrota[-dev]/` based on DAYROTA_ENV.
///
/// Set DAYROTA_DATA_DIR to override the location entirely, or
/// DAYROTA_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the data directory fails.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Ok(dir) = std::env::var("DAYROTA_DATA_DIR") {
        let dir = PathBuf::from(dir);
        std::fs::create_dir_all(&dir)?;
        return Ok(dir);
    }

    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DAYROTA_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("dayrota-dev")
    } else {
        base_dir.join("dayrota")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
