//! Candidate ordering for daily selection.
//!
//! Candidates are ranked by project due date (earliest first, undated
//! last), then project priority (highest first), then the user's
//! project type ranking, then task order within the project. Ties
//! beyond that keep the store's fetch order.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::prefs::Preferences;
use crate::task::TaskWithProject;

pub(crate) fn compare_candidates(
    prefs: &Preferences,
    a: &TaskWithProject,
    b: &TaskWithProject,
) -> Ordering {
    compare_due_dates(a.project.due_date, b.project.due_date)
        .then_with(|| b.project.priority.cmp(&a.project.priority))
        .then_with(|| {
            prefs
                .type_rank(a.project.project_type)
                .cmp(&prefs.type_rank(b.project.project_type))
        })
        .then_with(|| a.task.order_index.cmp(&b.task.order_index))
}

fn compare_due_dates(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort, so fully tied candidates keep their fetch order.
pub(crate) fn sort_candidates(prefs: &Preferences, candidates: &mut [TaskWithProject]) {
    candidates.sort_by(|a, b| compare_candidates(prefs, a, b));
}
