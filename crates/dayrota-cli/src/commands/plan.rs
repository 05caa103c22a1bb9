//! Plan intake commands.

use std::io::Read;

use clap::Subcommand;
use dayrota_core::{import_plan, AppConfig, ImportOptions, PlanResponse, SqliteStore};

use super::{parse_date_arg, parse_project_type};

#[derive(Subcommand)]
pub enum PlanAction {
    /// Import a decomposition reply as a project with its tasks
    Import {
        /// Path to the JSON file, or - for stdin
        file: String,
        /// Due date, YYYY-MM-DD
        #[arg(long)]
        due: Option<String>,
        /// Priority 1-5, 5 most urgent (default: 3)
        #[arg(long, default_value = "3")]
        priority: u8,
        /// Project type: work, study or life (default: work)
        #[arg(long, default_value = "work")]
        project_type: String,
    },
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    let store = SqliteStore::open()?;

    match action {
        PlanAction::Import {
            file,
            due,
            priority,
            project_type,
        } => {
            let json = if file == "-" {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                std::fs::read_to_string(&file)?
            };
            let plan: PlanResponse = serde_json::from_str(&json)?;
            let options = ImportOptions {
                due_date: due.map(|s| parse_date_arg(&s)).transpose()?,
                priority,
                project_type: parse_project_type(&project_type)?,
            };

            let project = import_plan(&store, &config.user_id, &plan, &options)?;
            let tasks = store.list_tasks(&config.user_id, Some(&project.id))?;
            println!("Imported project: {} ({} tasks)", project.id, tasks.len());
            println!("{}", serde_json::to_string_pretty(&project)?);
        }
    }
    Ok(())
}
