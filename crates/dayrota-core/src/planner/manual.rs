//! Manual assignment overrides.
//!
//! The picker flows next to the automatic planner: add one chosen task
//! to today, or swap an assigned task out for another. Both share the
//! planner's eligibility rule (open status, no assignment on any date)
//! and lean on the same storage uniqueness guard, so a race with a
//! concurrent planner run degrades into a clean error instead of a
//! duplicate row.
//!
//! None of these operations read preferences; manual control works
//! before onboarding and on inactive days.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::error::{AssignError, StoreError};
use crate::store::{InsertOutcome, PlannerStore};
use crate::task::{Assignment, TaskStatus, TaskWithProject};

/// Open tasks with no assignment on any date, in store fetch order.
/// This is the candidate list the add and swap pickers present.
pub fn eligible_tasks<S: PlannerStore + ?Sized>(
    store: &S,
    user_id: &str,
) -> Result<Vec<TaskWithProject>, AssignError> {
    let mut candidates = store.candidate_tasks(user_id)?;
    let candidate_ids: Vec<String> = candidates.iter().map(|c| c.task.id.clone()).collect();
    let assigned = store.assignments_for_tasks(&candidate_ids)?;
    candidates.retain(|c| !assigned.iter().any(|a| a.task_id == c.task.id));
    Ok(candidates)
}

/// Check that a task exists, is open, and holds no assignment.
fn ensure_assignable<S: PlannerStore + ?Sized>(
    store: &S,
    task_id: &str,
) -> Result<(), AssignError> {
    let statuses = store.task_statuses(&[task_id.to_string()])?;
    match statuses.get(task_id) {
        None | Some(TaskStatus::Completed) => {
            return Err(AssignError::NotAssignable {
                task_id: task_id.to_string(),
            })
        }
        Some(_) => {}
    }

    if !store
        .assignments_for_tasks(&[task_id.to_string()])?
        .is_empty()
    {
        return Err(AssignError::AlreadyAssigned {
            task_id: task_id.to_string(),
        });
    }
    Ok(())
}

/// Assign one chosen task to today, bypassing ranking and quota.
///
/// # Errors
///
/// Fails if the task is unknown or completed, or already holds an
/// assignment (including one created concurrently).
pub fn assign_task_today<S: PlannerStore + ?Sized>(
    store: &S,
    user_id: &str,
    task_id: &str,
    today: NaiveDate,
) -> Result<Assignment, AssignError> {
    ensure_assignable(store, task_id)?;

    let row = Assignment {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        date: today,
        task_id: task_id.to_string(),
        created_at: Utc::now(),
    };
    match store.insert_assignments(std::slice::from_ref(&row))? {
        InsertOutcome::Inserted => Ok(row),
        InsertOutcome::DuplicateTask => {
            tracing::debug!("manual assignment of {} lost a race", task_id);
            Err(AssignError::AlreadyAssigned {
                task_id: task_id.to_string(),
            })
        }
    }
}

/// Replace an assignment's task, keeping its date.
///
/// The replacement is vetted before the old row is removed, so an
/// ineligible pick leaves the original assignment untouched.
///
/// # Errors
///
/// Fails if the replacement is unknown, completed, or already
/// assigned, or if the assignment id does not exist for this user.
pub fn swap_assignment<S: PlannerStore + ?Sized>(
    store: &S,
    user_id: &str,
    assignment_id: &str,
    replacement_task_id: &str,
) -> Result<Assignment, AssignError> {
    ensure_assignable(store, replacement_task_id)?;

    let removed = match store.delete_assignment(user_id, assignment_id) {
        Ok(removed) => removed,
        Err(StoreError::NotFound { .. }) => {
            return Err(AssignError::AssignmentNotFound(assignment_id.to_string()))
        }
        Err(err) => return Err(err.into()),
    };

    let row = Assignment {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        date: removed.date,
        task_id: replacement_task_id.to_string(),
        created_at: Utc::now(),
    };
    match store.insert_assignments(std::slice::from_ref(&row))? {
        InsertOutcome::Inserted => Ok(row),
        InsertOutcome::DuplicateTask => {
            tracing::debug!(
                "swap replacement {} was assigned concurrently",
                replacement_task_id
            );
            Err(AssignError::AlreadyAssigned {
                task_id: replacement_task_id.to_string(),
            })
        }
    }
}
