//! App blocking commands.

use clap::Subcommand;
use dayrota_core::blocking::evaluate;
use dayrota_core::{AppConfig, SqliteStore};

use super::{now_local, today_local};

#[derive(Subcommand)]
pub enum BlockingAction {
    /// Report whether distracting apps should be blocked right now
    Status {
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: BlockingAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    let store = SqliteStore::open()?;

    match action {
        BlockingAction::Status { json } => {
            let status = evaluate(&store, &config.user_id, today_local(), now_local())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else if !status.enabled {
                println!("ALLOW (blocking disabled)");
            } else if status.after_sleep_time {
                println!("BLOCK (past sleep time)");
            } else if status.block {
                println!(
                    "BLOCK ({} of {} assigned tasks still open)",
                    status.incomplete_remaining, status.assigned_today
                );
            } else {
                println!("ALLOW");
            }
        }
    }
    Ok(())
}
