//! CLI command implementations.

use chrono::{Local, NaiveDate, NaiveTime, Weekday};
use dayrota_core::ProjectType;

pub mod blocking;
pub mod plan;
pub mod prefs;
pub mod project;
pub mod task;
pub mod today;

pub(crate) fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

pub(crate) fn now_local() -> NaiveTime {
    Local::now().time()
}

pub(crate) fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{s}', expected YYYY-MM-DD"))
}

pub(crate) fn parse_time_arg(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| format!("invalid time '{s}', expected HH:MM"))
}

pub(crate) fn parse_project_type(s: &str) -> Result<ProjectType, String> {
    match s.to_ascii_lowercase().as_str() {
        "work" => Ok(ProjectType::Work),
        "study" => Ok(ProjectType::Study),
        "life" => Ok(ProjectType::Life),
        _ => Err(format!("invalid project type '{s}', expected work, study or life")),
    }
}

/// Parse a comma-separated type ranking, e.g. `study,work,life`.
pub(crate) fn parse_type_order(s: &str) -> Result<Vec<ProjectType>, String> {
    s.split(',').map(|part| parse_project_type(part.trim())).collect()
}

/// Parse comma-separated weekdays, e.g. `Mon,Tue,Sat`.
pub(crate) fn parse_weekdays(s: &str) -> Result<Vec<Weekday>, String> {
    s.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<Weekday>().map_err(|_| format!("invalid weekday '{part}'"))
        })
        .collect()
}
