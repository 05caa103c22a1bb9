//! Daily assignment planning.
//!
//! [`ensure_today_assignments`] tops a user's day up to their
//! `tasks_per_day` quota from the pool of open tasks. Early exits
//! (no preferences, inactive weekday, quota already met) are reported
//! as outcomes, not errors. The run is idempotent and safe to invoke
//! from concurrent processes: selection re-checks its picks against a
//! fresh snapshot, and the store's uniqueness guard settles whatever
//! race remains.

pub mod manual;
mod ordering;

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::CoreError;
use crate::store::{InsertOutcome, PlannerStore};
use crate::task::Assignment;
use ordering::sort_candidates;

/// Report of one planning run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PlanOutcome {
    /// No stored preferences; planning is a no-op.
    NotOnboarded,
    /// Today is not one of the user's active days.
    InactiveDay,
    /// Today already holds at least `tasks_per_day` assignments.
    QuotaMet { assigned: usize },
    /// Selection ran; `skipped` picks were dropped because a fresh
    /// snapshot showed them assigned elsewhere.
    Planned { inserted: usize, skipped: usize },
    /// A concurrent run assigned one of the picks first. The winner's
    /// rows stand; nothing was written here.
    LostRace { selected: usize },
}

/// What selection decided before any write.
pub(crate) enum Selection {
    /// An early exit fired; nothing to commit.
    Settled(PlanOutcome),
    /// Task ids to assign to today, best first.
    Chosen { task_ids: Vec<String> },
}

/// Read preferences and open tasks, rank them, and pick what today
/// still needs. Pure reads; the commit step does the writing.
pub(crate) fn select_candidates<S: PlannerStore + ?Sized>(
    store: &S,
    user_id: &str,
    today: NaiveDate,
) -> Result<Selection, CoreError> {
    let Some(prefs) = store.preferences(user_id)? else {
        tracing::debug!("no preferences for {}; skipping planning", user_id);
        return Ok(Selection::Settled(PlanOutcome::NotOnboarded));
    };

    if !prefs.is_active_on(today.weekday()) {
        tracing::debug!("{} is not an active day for {}", today, user_id);
        return Ok(Selection::Settled(PlanOutcome::InactiveDay));
    }

    let existing = store.assignments(user_id, Some(today))?.len();
    let quota = prefs.tasks_per_day as usize;
    if existing >= quota {
        tracing::debug!("quota met for {} on {}: {} assigned", user_id, today, existing);
        return Ok(Selection::Settled(PlanOutcome::QuotaMet { assigned: existing }));
    }
    let needed = quota - existing;

    let mut candidates = store.candidate_tasks(user_id)?;

    // A task assigned on any date, past or future, is out of the pool.
    let candidate_ids: Vec<String> = candidates.iter().map(|c| c.task.id.clone()).collect();
    let assigned: HashSet<String> = store
        .assignments_for_tasks(&candidate_ids)?
        .into_iter()
        .map(|a| a.task_id)
        .collect();
    candidates.retain(|c| !assigned.contains(&c.task.id));

    sort_candidates(&prefs, &mut candidates);

    let task_ids: Vec<String> = candidates
        .into_iter()
        .take(needed)
        .map(|c| c.task.id)
        .collect();

    if task_ids.is_empty() {
        return Ok(Selection::Settled(PlanOutcome::Planned {
            inserted: 0,
            skipped: 0,
        }));
    }
    Ok(Selection::Chosen { task_ids })
}

/// Re-check the picks against a fresh snapshot, then insert the
/// survivors for `today` in one batch.
pub(crate) fn commit_assignments<S: PlannerStore + ?Sized>(
    store: &S,
    user_id: &str,
    today: NaiveDate,
    task_ids: &[String],
) -> Result<PlanOutcome, CoreError> {
    let taken: HashSet<String> = store
        .assignments_for_tasks(task_ids)?
        .into_iter()
        .map(|a| a.task_id)
        .collect();

    let now = Utc::now();
    let rows: Vec<Assignment> = task_ids
        .iter()
        .filter(|id| !taken.contains(*id))
        .map(|task_id| Assignment {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            date: today,
            task_id: task_id.clone(),
            created_at: now,
        })
        .collect();
    let skipped = task_ids.len() - rows.len();

    if rows.is_empty() {
        tracing::debug!(
            "all {} picks for {} were assigned concurrently",
            skipped,
            user_id
        );
        return Ok(PlanOutcome::Planned {
            inserted: 0,
            skipped,
        });
    }

    match store.insert_assignments(&rows)? {
        InsertOutcome::Inserted => Ok(PlanOutcome::Planned {
            inserted: rows.len(),
            skipped,
        }),
        InsertOutcome::DuplicateTask => {
            tracing::debug!(
                "lost assignment race for {}: {} rows discarded",
                user_id,
                rows.len()
            );
            Ok(PlanOutcome::LostRace {
                selected: rows.len(),
            })
        }
    }
}

/// Top today's assignments up to the user's quota.
///
/// Takes `today` as an argument so callers control the calendar date;
/// nothing here reads the wall clock for decisions.
///
/// # Errors
///
/// Returns an error if any storage read fails or the insert fails for
/// a reason other than a duplicate task. Nothing is written in either
/// case.
pub fn ensure_today_assignments<S: PlannerStore + ?Sized>(
    store: &S,
    user_id: &str,
    today: NaiveDate,
) -> Result<PlanOutcome, CoreError> {
    match select_candidates(store, user_id, today)? {
        Selection::Settled(outcome) => Ok(outcome),
        Selection::Chosen { task_ids } => commit_assignments(store, user_id, today, &task_ids),
    }
}
