//! App-blocking decision.
//!
//! Answers one question for a device-level enforcement layer: should
//! distracting apps be blocked right now? Blocking turns on past the
//! user's sleep cutoff, and during the day while assigned tasks remain
//! unfinished. The decision is recomputed from storage on every call
//! and fails open: without preferences, with blocking disabled, or on
//! any storage error the answer is "do not block".

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::error::CoreError;
use crate::store::PlannerStore;
use crate::task::TaskStatus;

/// Snapshot behind one blocking decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockingStatus {
    /// Whether blocking is enabled in preferences at all
    pub enabled: bool,
    /// The user's sleep cutoff, when preferences exist
    pub sleep_time: Option<NaiveTime>,
    /// Whether `now` is at or past the sleep cutoff
    pub after_sleep_time: bool,
    /// Assignments dated today
    pub assigned_today: usize,
    /// Assigned tasks not yet completed (missing task rows count)
    pub incomplete_remaining: usize,
    /// The verdict
    pub block: bool,
}

impl BlockingStatus {
    fn inactive(sleep_time: Option<NaiveTime>) -> Self {
        Self {
            enabled: false,
            sleep_time,
            after_sleep_time: false,
            assigned_today: 0,
            incomplete_remaining: 0,
            block: false,
        }
    }
}

/// Compute the full blocking report for a user at a point in time.
///
/// # Errors
///
/// Returns an error if any storage read fails. [`should_block`] maps
/// that to a non-blocking answer.
pub fn evaluate<S: PlannerStore + ?Sized>(
    store: &S,
    user_id: &str,
    today: NaiveDate,
    now: NaiveTime,
) -> Result<BlockingStatus, CoreError> {
    let Some(prefs) = store.preferences(user_id)? else {
        return Ok(BlockingStatus::inactive(None));
    };
    if !prefs.blocking_enabled {
        return Ok(BlockingStatus::inactive(Some(prefs.sleep_time)));
    }

    let assignments = store.assignments(user_id, Some(today))?;
    let task_ids: Vec<String> = assignments.iter().map(|a| a.task_id.clone()).collect();
    let statuses = store.task_statuses(&task_ids)?;

    // A vanished task row cannot be proven complete, so it still blocks.
    let incomplete_remaining = task_ids
        .iter()
        .filter(|id| {
            statuses
                .get(*id)
                .map(|status| *status != TaskStatus::Completed)
                .unwrap_or(true)
        })
        .count();

    let after_sleep_time = now >= prefs.sleep_time;
    let block = after_sleep_time || incomplete_remaining > 0;

    Ok(BlockingStatus {
        enabled: true,
        sleep_time: Some(prefs.sleep_time),
        after_sleep_time,
        assigned_today: assignments.len(),
        incomplete_remaining,
        block,
    })
}

/// Whether distracting apps should be blocked right now.
///
/// Fail-open wrapper around [`evaluate`]: storage failures are logged
/// and answered with `false` so a broken database never locks the user
/// out of their device.
pub fn should_block<S: PlannerStore + ?Sized>(
    store: &S,
    user_id: &str,
    today: NaiveDate,
    now: NaiveTime,
) -> bool {
    match evaluate(store, user_id, today, now) {
        Ok(status) => status.block,
        Err(err) => {
            tracing::warn!("blocking check failed for {}: {}; failing open", user_id, err);
            false
        }
    }
}
