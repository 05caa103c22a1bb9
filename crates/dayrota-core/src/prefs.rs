//! User scheduling preferences.
//!
//! Preferences gate the daily planner (how many tasks per day, which
//! weekdays are active), rank project types for candidate ordering, and
//! set the sleep cutoff for app blocking. A user without stored
//! preferences gets no automatic planning and no blocking.

use chrono::{DateTime, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::task::ProjectType;

/// Per-user planner preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    /// Owning user
    pub user_id: String,
    /// Daily assignment quota (1-20)
    #[serde(default = "default_tasks_per_day")]
    pub tasks_per_day: u8,
    /// Start of the user's day (informational)
    #[serde(default = "default_wake_time")]
    pub wake_time: NaiveTime,
    /// Blocking cutoff: at or past this time, distracting apps are blocked
    #[serde(default = "default_sleep_time")]
    pub sleep_time: NaiveTime,
    /// Project type ranking used as an ordering tie-break (index 0 first)
    #[serde(default = "default_type_priority_order")]
    pub type_priority_order: Vec<ProjectType>,
    /// Weekdays on which the planner generates assignments
    #[serde(default = "default_active_days")]
    pub active_days: Vec<Weekday>,
    /// Whether app blocking is enabled at all
    #[serde(default = "default_true")]
    pub blocking_enabled: bool,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

// Default functions
pub(crate) fn default_tasks_per_day() -> u8 {
    3
}
pub(crate) fn default_wake_time() -> NaiveTime {
    NaiveTime::from_hms_opt(7, 0, 0).unwrap()
}
pub(crate) fn default_sleep_time() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 0, 0).unwrap()
}
pub(crate) fn default_type_priority_order() -> Vec<ProjectType> {
    vec![ProjectType::Work, ProjectType::Study, ProjectType::Life]
}
pub(crate) fn default_active_days() -> Vec<Weekday> {
    vec![
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ]
}
fn default_true() -> bool {
    true
}

impl Preferences {
    /// Preferences with stock defaults for a new user.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            tasks_per_day: default_tasks_per_day(),
            wake_time: default_wake_time(),
            sleep_time: default_sleep_time(),
            type_priority_order: default_type_priority_order(),
            active_days: default_active_days(),
            blocking_enabled: true,
            updated_at: Utc::now(),
        }
    }

    /// Check invariants before persisting.
    ///
    /// # Errors
    ///
    /// Returns an error if the quota is out of range, the type ranking
    /// is not a permutation of all project types, or no weekday is
    /// active.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=20).contains(&self.tasks_per_day) {
            return Err(ValidationError::InvalidValue {
                field: "tasks_per_day".into(),
                message: format!("must be between 1 and 20, got {}", self.tasks_per_day),
            });
        }

        if self.active_days.is_empty() {
            return Err(ValidationError::EmptyCollection("active_days".into()));
        }

        for ty in ProjectType::ALL {
            let count = self
                .type_priority_order
                .iter()
                .filter(|t| **t == ty)
                .count();
            if count != 1 {
                return Err(ValidationError::InvalidValue {
                    field: "type_priority_order".into(),
                    message: "must list each project type exactly once".into(),
                });
            }
        }

        Ok(())
    }

    /// Whether the planner should generate assignments on `day`.
    pub fn is_active_on(&self, day: Weekday) -> bool {
        self.active_days.contains(&day)
    }

    /// Rank of a project type in the user's ordering (lower sorts
    /// first). Types missing from the ranking sort after all listed
    /// ones.
    pub fn type_rank(&self, project_type: ProjectType) -> usize {
        self.type_priority_order
            .iter()
            .position(|t| *t == project_type)
            .unwrap_or(self.type_priority_order.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_defaults() {
        let prefs = Preferences::new("user-1");
        assert_eq!(prefs.tasks_per_day, 3);
        assert_eq!(prefs.wake_time, NaiveTime::from_hms_opt(7, 0, 0).unwrap());
        assert_eq!(prefs.sleep_time, NaiveTime::from_hms_opt(23, 0, 0).unwrap());
        assert_eq!(
            prefs.type_priority_order,
            vec![ProjectType::Work, ProjectType::Study, ProjectType::Life]
        );
        assert_eq!(prefs.active_days.len(), 5);
        assert!(prefs.blocking_enabled);
        assert!(prefs.validate().is_ok());
    }

    #[test]
    fn quota_bounds_are_enforced() {
        let mut prefs = Preferences::new("user-1");
        prefs.tasks_per_day = 0;
        assert!(prefs.validate().is_err());
        prefs.tasks_per_day = 21;
        assert!(prefs.validate().is_err());
        prefs.tasks_per_day = 20;
        assert!(prefs.validate().is_ok());
    }

    #[test]
    fn at_least_one_active_day_required() {
        let mut prefs = Preferences::new("user-1");
        prefs.active_days.clear();
        assert!(prefs.validate().is_err());
        prefs.active_days.push(Weekday::Sat);
        assert!(prefs.validate().is_ok());
    }

    #[test]
    fn type_order_must_be_a_permutation() {
        let mut prefs = Preferences::new("user-1");
        prefs.type_priority_order = vec![ProjectType::Work, ProjectType::Work, ProjectType::Life];
        assert!(prefs.validate().is_err());
        prefs.type_priority_order = vec![ProjectType::Life, ProjectType::Work];
        assert!(prefs.validate().is_err());
        prefs.type_priority_order =
            vec![ProjectType::Life, ProjectType::Work, ProjectType::Study];
        assert!(prefs.validate().is_ok());
    }

    #[test]
    fn type_rank_follows_configured_order() {
        let mut prefs = Preferences::new("user-1");
        prefs.type_priority_order =
            vec![ProjectType::Study, ProjectType::Life, ProjectType::Work];
        assert_eq!(prefs.type_rank(ProjectType::Study), 0);
        assert_eq!(prefs.type_rank(ProjectType::Life), 1);
        assert_eq!(prefs.type_rank(ProjectType::Work), 2);
    }

    #[test]
    fn weekend_is_inactive_by_default() {
        let prefs = Preferences::new("user-1");
        assert!(prefs.is_active_on(Weekday::Mon));
        assert!(prefs.is_active_on(Weekday::Fri));
        assert!(!prefs.is_active_on(Weekday::Sat));
        assert!(!prefs.is_active_on(Weekday::Sun));
    }
}
