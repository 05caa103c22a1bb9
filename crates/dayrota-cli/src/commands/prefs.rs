//! Planning preference commands.

use chrono::Utc;
use clap::Subcommand;
use dayrota_core::{AppConfig, PlannerStore, Preferences, SqliteStore};

use super::{parse_time_arg, parse_type_order, parse_weekdays};

#[derive(Subcommand)]
pub enum PrefsAction {
    /// Update preferences, creating them with defaults on first use
    Set {
        /// Tasks to assign per active day, 1-20
        #[arg(long)]
        tasks_per_day: Option<u8>,
        /// Wake time, HH:MM
        #[arg(long)]
        wake: Option<String>,
        /// Sleep time, HH:MM; blocking always applies after this
        #[arg(long)]
        sleep: Option<String>,
        /// Comma-separated type ranking, e.g. study,work,life
        #[arg(long)]
        type_order: Option<String>,
        /// Comma-separated active days, e.g. Mon,Tue,Wed,Thu,Fri
        #[arg(long)]
        days: Option<String>,
        /// Enable or disable app blocking
        #[arg(long)]
        blocking: Option<bool>,
    },
    /// Show stored preferences
    Show,
}

pub fn run(action: PrefsAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    let store = SqliteStore::open()?;

    match action {
        PrefsAction::Set {
            tasks_per_day,
            wake,
            sleep,
            type_order,
            days,
            blocking,
        } => {
            let mut prefs = store
                .preferences(&config.user_id)?
                .unwrap_or_else(|| Preferences::new(config.user_id.clone()));

            if let Some(n) = tasks_per_day {
                prefs.tasks_per_day = n;
            }
            if let Some(s) = wake {
                prefs.wake_time = parse_time_arg(&s)?;
            }
            if let Some(s) = sleep {
                prefs.sleep_time = parse_time_arg(&s)?;
            }
            if let Some(s) = type_order {
                prefs.type_priority_order = parse_type_order(&s)?;
            }
            if let Some(s) = days {
                prefs.active_days = parse_weekdays(&s)?;
            }
            if let Some(b) = blocking {
                prefs.blocking_enabled = b;
            }
            prefs.updated_at = Utc::now();

            prefs.validate()?;
            store.save_preferences(&prefs)?;
            println!("Preferences saved:");
            println!("{}", serde_json::to_string_pretty(&prefs)?);
        }
        PrefsAction::Show => match store.preferences(&config.user_id)? {
            Some(prefs) => println!("{}", serde_json::to_string_pretty(&prefs)?),
            None => println!("No preferences stored yet. Run `dayrota-cli prefs set` first."),
        },
    }
    Ok(())
}
