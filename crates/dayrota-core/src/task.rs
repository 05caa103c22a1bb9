//! Task, project, and assignment types for the daily planner.
//!
//! Tasks belong to exactly one project and carry an explicit position
//! within it. They move through a small state machine:
//!
//! Valid transitions:
//! - pending → in_progress (start)
//! - pending → completed (done without starting)
//! - in_progress → completed (done)
//! - in_progress → pending (put back)
//!
//! `completed` is terminal.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Project category, ranked by the user's type priority order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Work,
    Study,
    Life,
}

impl ProjectType {
    /// All categories, in the stock ranking order.
    pub const ALL: [ProjectType; 3] = [ProjectType::Work, ProjectType::Study, ProjectType::Life];
}

impl Default for ProjectType {
    fn default() -> Self {
        ProjectType::Work
    }
}

/// Task status enumeration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started (initial state)
    Pending,
    /// Started but not finished
    InProgress,
    /// Finished (terminal state)
    Completed,
}

impl TaskStatus {
    /// Check if a transition is valid.
    pub fn can_transition_to(&self, to: &TaskStatus) -> bool {
        match self {
            TaskStatus::Pending => {
                matches!(to, TaskStatus::InProgress | TaskStatus::Completed)
            }
            TaskStatus::InProgress => {
                matches!(to, TaskStatus::Completed | TaskStatus::Pending)
            }
            TaskStatus::Completed => false,
        }
    }

    /// Get valid next states for this state.
    pub fn valid_transitions(&self) -> &[TaskStatus] {
        match self {
            TaskStatus::Pending => &[TaskStatus::InProgress, TaskStatus::Completed],
            TaskStatus::InProgress => &[TaskStatus::Completed, TaskStatus::Pending],
            TaskStatus::Completed => &[],
        }
    }

    /// Whether the task still counts as open work for the planner.
    pub fn is_open(&self) -> bool {
        matches!(self, TaskStatus::Pending | TaskStatus::InProgress)
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Pending
    }
}

/// Project owning an ordered list of tasks.
///
/// Immutable to the planner: projects are created by plan intake (or
/// manually) and read back as ordering inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Project title
    pub title: String,
    /// Due date, the primary ordering key (absent sorts last)
    pub due_date: Option<NaiveDate>,
    /// Urgency 1-5, 5 most urgent
    pub priority: u8,
    /// Category for preference-driven ordering
    pub project_type: ProjectType,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// A single actionable step within a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Owning project
    pub project_id: String,
    /// Position within the project, starting at 1
    pub order_index: i64,
    /// Task title
    pub title: String,
    /// Newline-separated sub-step bullets from plan intake
    #[serde(default)]
    pub subtasks_text: String,
    /// Task status
    pub status: TaskStatus,
    /// Accumulated focus minutes (display only)
    #[serde(default)]
    pub total_minutes: i64,
    /// Completion timestamp, set when the task enters `completed`
    pub completed_at: Option<DateTime<Utc>>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// A task scheduled for a specific day.
///
/// Append-only: rows are inserted by the planner or the manual add and
/// swap operations, and removed only by swaps. A unique index on
/// `task_id` keeps each task on at most one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique identifier
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// The day the task is scheduled for
    pub date: NaiveDate,
    /// The assigned task
    pub task_id: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Candidate read model: a task joined with its owning project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskWithProject {
    pub task: Task,
    pub project: Project,
}

/// Today-view read model: an assignment joined with its task and the
/// project title.
#[derive(Debug, Clone, Serialize)]
pub struct AssignedTask {
    pub assignment: Assignment,
    pub task: Task,
    pub project_title: String,
}
