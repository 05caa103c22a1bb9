use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "dayrota-cli", version, about = "Dayrota CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Planning preferences
    Prefs {
        #[command(subcommand)]
        action: commands::prefs::PrefsAction,
    },
    /// Project management
    Project {
        #[command(subcommand)]
        action: commands::project::ProjectAction,
    },
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Plan intake from the decomposition service
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Today's assignment list
    Today {
        #[command(subcommand)]
        action: commands::today::TodayAction,
    },
    /// App blocking verdict
    Blocking {
        #[command(subcommand)]
        action: commands::blocking::BlockingAction,
    },
}

fn main() {
    // Logs go to stderr so JSON output on stdout stays parseable.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Prefs { action } => commands::prefs::run(action),
        Commands::Project { action } => commands::project::run(action),
        Commands::Task { action } => commands::task::run(action),
        Commands::Plan { action } => commands::plan::run(action),
        Commands::Today { action } => commands::today::run(action),
        Commands::Blocking { action } => commands::blocking::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
