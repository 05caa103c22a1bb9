//! SQLite-based storage for projects, tasks, assignments, and preferences.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc, Weekday};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

use super::data_dir;
use super::{InsertOutcome, PlannerStore};
use crate::error::StoreError;
use crate::prefs::{
    default_active_days, default_sleep_time, default_type_priority_order, default_wake_time,
    Preferences,
};
use crate::task::{
    AssignedTask, Assignment, Project, ProjectType, Task, TaskStatus, TaskWithProject,
};

// === Helper Functions ===

/// Parse task status from database string
fn parse_task_status(status_str: &str) -> TaskStatus {
    match status_str {
        "in_progress" => TaskStatus::InProgress,
        "completed" => TaskStatus::Completed,
        _ => TaskStatus::Pending,
    }
}

/// Format task status for database storage
fn format_task_status(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "pending",
        TaskStatus::InProgress => "in_progress",
        TaskStatus::Completed => "completed",
    }
}

/// Parse project type from database string
fn parse_project_type(type_str: &str) -> ProjectType {
    match type_str {
        "study" => ProjectType::Study,
        "life" => ProjectType::Life,
        _ => ProjectType::Work,
    }
}

/// Format project type for database storage
fn format_project_type(project_type: ProjectType) -> &'static str {
    match project_type {
        ProjectType::Work => "work",
        ProjectType::Study => "study",
        ProjectType::Life => "life",
    }
}

/// Parse a weekday code ("Mon".."Sun") from database storage
fn parse_weekday(code: &str) -> Option<Weekday> {
    match code {
        "Mon" => Some(Weekday::Mon),
        "Tue" => Some(Weekday::Tue),
        "Wed" => Some(Weekday::Wed),
        "Thu" => Some(Weekday::Thu),
        "Fri" => Some(Weekday::Fri),
        "Sat" => Some(Weekday::Sat),
        "Sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Format a weekday for database storage
fn format_weekday(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Parse a JSON array of project types, falling back to the default order
fn parse_type_order(json: &str) -> Vec<ProjectType> {
    serde_json::from_str(json).unwrap_or_else(|_| default_type_priority_order())
}

/// Parse a JSON array of weekday codes, falling back to the default days
fn parse_active_days(json: &str) -> Vec<Weekday> {
    let codes: Vec<String> = match serde_json::from_str(json) {
        Ok(codes) => codes,
        Err(_) => return default_active_days(),
    };
    codes.iter().filter_map(|code| parse_weekday(code)).collect()
}

/// Parse an HH:MM time with fallback to the given default
fn parse_time_fallback(time_str: &str, fallback: NaiveTime) -> NaiveTime {
    NaiveTime::parse_from_str(time_str, "%H:%M").unwrap_or(fallback)
}

/// Format a time for database storage
fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Parse datetime from RFC3339 string with fallback to current time
fn parse_datetime_fallback(dt_str: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(dt_str)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

/// Parse a calendar date. Assignment dates drive planner decisions, so
/// corrupt values are an error rather than silently remapped.
fn parse_date(date_str: &str) -> Result<NaiveDate, StoreError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| StoreError::InvalidData(format!("bad assignment date: {date_str}")))
}

/// Format a date for database storage
fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

/// Build a Task from a database row starting at column `base`
fn task_from_row(row: &rusqlite::Row, base: usize) -> Result<Task, rusqlite::Error> {
    let status_str: String = row.get(base + 6)?;

    let completed_at_str: Option<String> = row.get(base + 8)?;
    let completed_at = completed_at_str
        .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
        .map(|dt| dt.with_timezone(&Utc));

    let created_at_str: String = row.get(base + 9)?;

    Ok(Task {
        id: row.get(base)?,
        user_id: row.get(base + 1)?,
        project_id: row.get(base + 2)?,
        order_index: row.get(base + 3)?,
        title: row.get(base + 4)?,
        subtasks_text: row.get(base + 5)?,
        status: parse_task_status(&status_str),
        total_minutes: row.get(base + 7)?,
        completed_at,
        created_at: parse_datetime_fallback(&created_at_str),
    })
}

/// Build a Project from a database row starting at column `base`
fn project_from_row(row: &rusqlite::Row, base: usize) -> Result<Project, rusqlite::Error> {
    let due_date_str: Option<String> = row.get(base + 3)?;
    let due_date = due_date_str.and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok());

    let type_str: String = row.get(base + 5)?;
    let created_at_str: String = row.get(base + 6)?;

    Ok(Project {
        id: row.get(base)?,
        user_id: row.get(base + 1)?,
        title: row.get(base + 2)?,
        due_date,
        priority: row.get(base + 4)?,
        project_type: parse_project_type(&type_str),
        created_at: parse_datetime_fallback(&created_at_str),
    })
}

/// Build an Assignment from a database row (columns 0..4)
fn assignment_from_row(row: &rusqlite::Row) -> Result<Assignment, StoreError> {
    let date_str: String = row.get(2)?;
    let created_at_str: String = row.get(4)?;

    Ok(Assignment {
        id: row.get(0)?,
        user_id: row.get(1)?,
        date: parse_date(&date_str)?,
        task_id: row.get(3)?,
        created_at: parse_datetime_fallback(&created_at_str),
    })
}

const TASK_COLUMNS: &str = "id, user_id, project_id, order_index, title, subtasks_text, \
                            status, total_minutes, completed_at, created_at";

const PROJECT_COLUMNS: &str = "id, user_id, title, due_date, priority, project_type, created_at";

/// SQLite database for planner storage.
///
/// Stores projects, tasks, daily assignments, and per-user preferences.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open the planner database at `~/.config/dayrota/dayrota.db`.
    ///
    /// Creates tables if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        let path = data_dir()?.join("dayrota.db");
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, Box<dyn std::error::Error>> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS projects (
                id           TEXT PRIMARY KEY,
                user_id      TEXT NOT NULL,
                title        TEXT NOT NULL,
                due_date     TEXT,
                priority     INTEGER NOT NULL DEFAULT 3,
                project_type TEXT NOT NULL DEFAULT 'work',
                created_at   TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS tasks (
                id            TEXT PRIMARY KEY,
                user_id       TEXT NOT NULL,
                project_id    TEXT NOT NULL,
                order_index   INTEGER NOT NULL DEFAULT 0,
                title         TEXT NOT NULL,
                subtasks_text TEXT NOT NULL DEFAULT '',
                status        TEXT NOT NULL DEFAULT 'pending',
                total_minutes INTEGER NOT NULL DEFAULT 0,
                completed_at  TEXT,
                created_at    TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS daily_assignments (
                id         TEXT PRIMARY KEY,
                user_id    TEXT NOT NULL,
                date       TEXT NOT NULL,
                task_id    TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS preferences (
                user_id             TEXT PRIMARY KEY,
                tasks_per_day       INTEGER NOT NULL DEFAULT 3,
                wake_time           TEXT NOT NULL DEFAULT '07:00',
                sleep_time          TEXT NOT NULL DEFAULT '23:00',
                type_priority_order TEXT NOT NULL DEFAULT '[]',
                active_days         TEXT NOT NULL DEFAULT '[]',
                blocking_enabled    INTEGER NOT NULL DEFAULT 1,
                updated_at          TEXT NOT NULL
            );",
        )?;

        // One assignment per task, ever. The planner relies on this to
        // resolve concurrent generation races.
        self.conn.execute(
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_assignments_task_unique
             ON daily_assignments(task_id)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_assignments_user_date
             ON daily_assignments(user_id, date)",
            [],
        )?;

        Ok(())
    }

    fn insert_project_row(&self, project: &Project) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT INTO projects (id, user_id, title, due_date, priority, project_type, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                project.id,
                project.user_id,
                project.title,
                project.due_date.map(format_date),
                project.priority,
                format_project_type(project.project_type),
                project.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    fn insert_task_row(&self, task: &Task) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT INTO tasks (id, user_id, project_id, order_index, title, subtasks_text,
                                status, total_minutes, completed_at, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                task.id,
                task.user_id,
                task.project_id,
                task.order_index,
                task.title,
                task.subtasks_text,
                format_task_status(task.status),
                task.total_minutes,
                task.completed_at.map(|dt| dt.to_rfc3339()),
                task.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    // === Project CRUD ===

    /// Create a new project.
    pub fn create_project(&self, project: &Project) -> Result<(), StoreError> {
        self.insert_project_row(project)?;
        Ok(())
    }

    /// Get a project by ID.
    pub fn get_project(&self, id: &str) -> Result<Option<Project>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = ?1"
        ))?;
        let project = stmt
            .query_row(params![id], |row| project_from_row(row, 0))
            .optional()?;
        Ok(project)
    }

    /// List a user's projects in creation order.
    pub fn list_projects(&self, user_id: &str) -> Result<Vec<Project>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects
             WHERE user_id = ?1
             ORDER BY created_at ASC, id ASC"
        ))?;
        let mut rows = stmt.query(params![user_id])?;
        let mut projects = Vec::new();
        while let Some(row) = rows.next()? {
            projects.push(project_from_row(row, 0)?);
        }
        Ok(projects)
    }

    /// Create a project and its tasks in a single transaction.
    pub fn create_project_with_tasks(
        &self,
        project: &Project,
        tasks: &[Task],
    ) -> Result<(), StoreError> {
        self.conn.execute_batch("BEGIN IMMEDIATE TRANSACTION;")?;
        let result: Result<(), rusqlite::Error> = (|| {
            self.insert_project_row(project)?;
            for task in tasks {
                self.insert_task_row(task)?;
            }
            Ok(())
        })();
        match result {
            Ok(()) => {
                self.conn.execute_batch("COMMIT;")?;
                Ok(())
            }
            Err(err) => {
                let _ = self.conn.execute_batch("ROLLBACK;");
                Err(err.into())
            }
        }
    }

    // === Task CRUD ===

    /// Create a new task.
    pub fn create_task(&self, task: &Task) -> Result<(), StoreError> {
        self.insert_task_row(task)?;
        Ok(())
    }

    /// Get a task by ID.
    pub fn get_task(&self, id: &str) -> Result<Option<Task>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1"))?;
        let task = stmt
            .query_row(params![id], |row| task_from_row(row, 0))
            .optional()?;
        Ok(task)
    }

    /// List a user's tasks, optionally restricted to one project.
    pub fn list_tasks(
        &self,
        user_id: &str,
        project_id: Option<&str>,
    ) -> Result<Vec<Task>, StoreError> {
        let mut tasks = Vec::new();
        if let Some(project_id) = project_id {
            let mut stmt = self.conn.prepare(&format!(
                "SELECT {TASK_COLUMNS} FROM tasks
                 WHERE user_id = ?1 AND project_id = ?2
                 ORDER BY order_index ASC, created_at ASC"
            ))?;
            let mut rows = stmt.query(params![user_id, project_id])?;
            while let Some(row) = rows.next()? {
                tasks.push(task_from_row(row, 0)?);
            }
        } else {
            let mut stmt = self.conn.prepare(&format!(
                "SELECT {TASK_COLUMNS} FROM tasks
                 WHERE user_id = ?1
                 ORDER BY created_at ASC, order_index ASC"
            ))?;
            let mut rows = stmt.query(params![user_id])?;
            while let Some(row) = rows.next()? {
                tasks.push(task_from_row(row, 0)?);
            }
        }
        Ok(tasks)
    }

    /// Update a task's status and completion timestamp.
    pub fn set_task_status(
        &self,
        task_id: &str,
        status: TaskStatus,
        completed_at: Option<DateTime<Utc>>,
    ) -> Result<(), StoreError> {
        self.conn.execute(
            "UPDATE tasks SET status = ?1, completed_at = ?2 WHERE id = ?3",
            params![
                format_task_status(status),
                completed_at.map(|dt| dt.to_rfc3339()),
                task_id,
            ],
        )?;
        Ok(())
    }

    /// Next free 1-based order index within a project.
    pub fn next_order_index(&self, project_id: &str) -> Result<i64, StoreError> {
        let max: Option<i64> = self.conn.query_row(
            "SELECT MAX(order_index) FROM tasks WHERE project_id = ?1",
            params![project_id],
            |row| row.get(0),
        )?;
        Ok(max.unwrap_or(0) + 1)
    }

    // === Preferences ===

    /// Insert or replace a user's preferences.
    pub fn save_preferences(&self, prefs: &Preferences) -> Result<(), StoreError> {
        let order_json = serde_json::to_string(&prefs.type_priority_order).unwrap();
        let day_codes: Vec<&'static str> = prefs
            .active_days
            .iter()
            .map(|day| format_weekday(*day))
            .collect();
        let days_json = serde_json::to_string(&day_codes).unwrap();

        self.conn.execute(
            "INSERT OR REPLACE INTO preferences
                (user_id, tasks_per_day, wake_time, sleep_time, type_priority_order,
                 active_days, blocking_enabled, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                prefs.user_id,
                prefs.tasks_per_day,
                format_time(prefs.wake_time),
                format_time(prefs.sleep_time),
                order_json,
                days_json,
                if prefs.blocking_enabled { 1 } else { 0 },
                prefs.updated_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    // === Assignments ===

    /// Assignments joined with their tasks and project titles for one
    /// date, in assignment order. Assignments whose task row is gone
    /// are omitted.
    pub fn assigned_tasks(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<AssignedTask>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT a.id, a.user_id, a.date, a.task_id, a.created_at,
                    t.id, t.user_id, t.project_id, t.order_index, t.title, t.subtasks_text,
                    t.status, t.total_minutes, t.completed_at, t.created_at,
                    p.title
             FROM daily_assignments a
             JOIN tasks t ON t.id = a.task_id
             JOIN projects p ON p.id = t.project_id
             WHERE a.user_id = ?1 AND a.date = ?2
             ORDER BY a.created_at ASC, a.id ASC",
        )?;
        let mut rows = stmt.query(params![user_id, format_date(date)])?;
        let mut results = Vec::new();
        while let Some(row) = rows.next()? {
            let assignment = assignment_from_row(row)?;
            let task = task_from_row(row, 5)?;
            let project_title: String = row.get(15)?;
            results.push(AssignedTask {
                assignment,
                task,
                project_title,
            });
        }
        Ok(results)
    }
}

impl PlannerStore for SqliteStore {
    fn preferences(&self, user_id: &str) -> Result<Option<Preferences>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT user_id, tasks_per_day, wake_time, sleep_time, type_priority_order,
                    active_days, blocking_enabled, updated_at
             FROM preferences WHERE user_id = ?1",
        )?;
        let prefs = stmt
            .query_row(params![user_id], |row| {
                let wake_str: String = row.get(2)?;
                let sleep_str: String = row.get(3)?;
                let order_json: String = row.get(4)?;
                let days_json: String = row.get(5)?;
                let updated_at_str: String = row.get(7)?;

                Ok(Preferences {
                    user_id: row.get(0)?,
                    tasks_per_day: row.get(1)?,
                    wake_time: parse_time_fallback(&wake_str, default_wake_time()),
                    sleep_time: parse_time_fallback(&sleep_str, default_sleep_time()),
                    type_priority_order: parse_type_order(&order_json),
                    active_days: parse_active_days(&days_json),
                    blocking_enabled: row.get::<_, i32>(6)? != 0,
                    updated_at: parse_datetime_fallback(&updated_at_str),
                })
            })
            .optional()?;
        Ok(prefs)
    }

    fn candidate_tasks(&self, user_id: &str) -> Result<Vec<TaskWithProject>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT t.id, t.user_id, t.project_id, t.order_index, t.title, t.subtasks_text,
                    t.status, t.total_minutes, t.completed_at, t.created_at,
                    p.id, p.user_id, p.title, p.due_date, p.priority, p.project_type, p.created_at
             FROM tasks t
             JOIN projects p ON p.id = t.project_id
             WHERE t.user_id = ?1 AND t.status IN ('pending', 'in_progress')
             ORDER BY t.created_at ASC, t.id ASC",
        )?;
        let mut rows = stmt.query(params![user_id])?;
        let mut candidates = Vec::new();
        while let Some(row) = rows.next()? {
            candidates.push(TaskWithProject {
                task: task_from_row(row, 0)?,
                project: project_from_row(row, 10)?,
            });
        }
        Ok(candidates)
    }

    fn assignments(
        &self,
        user_id: &str,
        date: Option<NaiveDate>,
    ) -> Result<Vec<Assignment>, StoreError> {
        let mut results = Vec::new();
        if let Some(date) = date {
            let mut stmt = self.conn.prepare(
                "SELECT id, user_id, date, task_id, created_at
                 FROM daily_assignments
                 WHERE user_id = ?1 AND date = ?2
                 ORDER BY created_at ASC, id ASC",
            )?;
            let mut rows = stmt.query(params![user_id, format_date(date)])?;
            while let Some(row) = rows.next()? {
                results.push(assignment_from_row(row)?);
            }
        } else {
            let mut stmt = self.conn.prepare(
                "SELECT id, user_id, date, task_id, created_at
                 FROM daily_assignments
                 WHERE user_id = ?1
                 ORDER BY date ASC, created_at ASC",
            )?;
            let mut rows = stmt.query(params![user_id])?;
            while let Some(row) = rows.next()? {
                results.push(assignment_from_row(row)?);
            }
        }
        Ok(results)
    }

    fn assignments_for_tasks(&self, task_ids: &[String]) -> Result<Vec<Assignment>, StoreError> {
        if task_ids.is_empty() {
            return Ok(Vec::new());
        }
        let placeholders = task_ids.iter().map(|_| "?").collect::<Vec<_>>().join(", ");
        let mut stmt = self.conn.prepare(&format!(
            "SELECT id, user_id, date, task_id, created_at
             FROM daily_assignments
             WHERE task_id IN ({placeholders})"
        ))?;
        let mut rows = stmt.query(params_from_iter(task_ids))?;
        let mut results = Vec::new();
        while let Some(row) = rows.next()? {
            results.push(assignment_from_row(row)?);
        }
        Ok(results)
    }

    fn insert_assignments(&self, rows: &[Assignment]) -> Result<InsertOutcome, StoreError> {
        if rows.is_empty() {
            return Ok(InsertOutcome::Inserted);
        }
        self.conn.execute_batch("BEGIN IMMEDIATE TRANSACTION;")?;
        let result: Result<(), rusqlite::Error> = (|| {
            for assignment in rows {
                self.conn.execute(
                    "INSERT INTO daily_assignments (id, user_id, date, task_id, created_at)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![
                        assignment.id,
                        assignment.user_id,
                        format_date(assignment.date),
                        assignment.task_id,
                        assignment.created_at.to_rfc3339(),
                    ],
                )?;
            }
            Ok(())
        })();
        match result {
            Ok(()) => {
                self.conn.execute_batch("COMMIT;")?;
                Ok(InsertOutcome::Inserted)
            }
            Err(err) => {
                let _ = self.conn.execute_batch("ROLLBACK;");
                if is_unique_violation(&err) {
                    Ok(InsertOutcome::DuplicateTask)
                } else {
                    Err(err.into())
                }
            }
        }
    }

    fn task_statuses(
        &self,
        task_ids: &[String],
    ) -> Result<HashMap<String, TaskStatus>, StoreError> {
        if task_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let placeholders = task_ids.iter().map(|_| "?").collect::<Vec<_>>().join(", ");
        let mut stmt = self.conn.prepare(&format!(
            "SELECT id, status FROM tasks WHERE id IN ({placeholders})"
        ))?;
        let mut rows = stmt.query(params_from_iter(task_ids))?;
        let mut statuses = HashMap::new();
        while let Some(row) = rows.next()? {
            let id: String = row.get(0)?;
            let status_str: String = row.get(1)?;
            statuses.insert(id, parse_task_status(&status_str));
        }
        Ok(statuses)
    }

    fn delete_assignment(
        &self,
        user_id: &str,
        assignment_id: &str,
    ) -> Result<Assignment, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, user_id, date, task_id, created_at
             FROM daily_assignments
             WHERE id = ?1 AND user_id = ?2",
        )?;
        let found = stmt
            .query_row(params![assignment_id, user_id], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                ))
            })
            .optional()?;

        let Some((id, owner, date_str, task_id, created_at_str)) = found else {
            return Err(StoreError::NotFound {
                entity: "assignment",
                id: assignment_id.to_string(),
            });
        };

        let assignment = Assignment {
            id,
            user_id: owner,
            date: parse_date(&date_str)?,
            task_id,
            created_at: parse_datetime_fallback(&created_at_str),
        };

        self.conn.execute(
            "DELETE FROM daily_assignments WHERE id = ?1",
            params![assignment_id],
        )?;
        Ok(assignment)
    }
}
