//! # Dayrota Core Library
//!
//! This library provides the core business logic for Dayrota, a daily task
//! planner built around one habit: every active day gets a small, fixed
//! number of tasks, and distracting apps stay blocked until they are done.
//! It implements a CLI-first philosophy where all operations are available
//! via a standalone CLI binary, so device-level shells can stay thin layers
//! over the same core library.
//!
//! ## Architecture
//!
//! - **Planner**: idempotent daily top-up that selects open tasks by due
//!   date, project priority, project type, and manual order, then inserts
//!   assignments with an optimistic re-check
//! - **Blocking**: per-call evaluation of whether distracting apps should
//!   be blocked, failing open on any storage error
//! - **Storage**: SQLite-backed store behind the [`PlannerStore`] trait,
//!   plus TOML-based application configuration
//! - **Intake**: validation and materialization of plan responses from the
//!   external decomposition service
//!
//! ## Key Components
//!
//! - [`ensure_today_assignments`]: the daily planning entry point
//! - [`should_block`]: the blocking decision for enforcement layers
//! - [`SqliteStore`]: persistence for preferences, projects, tasks, and
//!   daily assignments
//! - [`PlanResponse`]: the decomposition service's output shape

pub mod blocking;
pub mod error;
pub mod intake;
pub mod planner;
pub mod prefs;
pub mod store;
pub mod task;

pub use blocking::{should_block, BlockingStatus};
pub use error::{AssignError, CoreError, StoreError, ValidationError};
pub use intake::{import_plan, ImportOptions, PlanResponse, PlannedTask};
pub use planner::{ensure_today_assignments, PlanOutcome};
pub use prefs::Preferences;
pub use store::{AppConfig, InsertOutcome, PlannerStore, SqliteStore};
pub use task::{Assignment, AssignedTask, Project, ProjectType, Task, TaskStatus, TaskWithProject};
