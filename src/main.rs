mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use encontros_core::Store;
use encontros_core::config::AppConfig;

#[derive(Parser)]
#[command(name = "encontros")]
#[command(about = "Manage the meetup group's events, RSVPs and attendance reports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database and seed the admin credential
    Init,
    /// List events with their confirmation counts
    List {
        /// Only show events on this day (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Create an event (admin)
    New {
        title: String,

        /// Day of the event (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        #[arg(short, long)]
        venue: String,

        #[arg(long)]
        description: String,
    },
    /// Overwrite an event's fields (admin)
    Update {
        id: u64,

        #[arg(long)]
        title: Option<String>,

        /// New day (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        venue: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },
    /// Delete an event (admin)
    Delete { id: u64 },
    /// Confirm attendance at an event
    Attend {
        event_id: u64,

        /// Your display name
        #[arg(short, long)]
        name: String,
    },
    /// List who confirmed attendance at an event (admin)
    Attendances { event_id: u64 },
    /// Export the attendance report as CSV (admin)
    Export {
        /// Output path (defaults to ./encontros-<today>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print an "add to Google Calendar" link for an event
    Share {
        event_id: u64,

        /// Open the link in the browser
        #[arg(long)]
        open: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    let db_path = config.database_path();
    let store = Store::open(&db_path)?;

    match cli.command {
        Commands::Init => commands::init::run(&db_path),
        Commands::List { date } => commands::list::run(&store, date.as_deref()),
        Commands::New {
            title,
            date,
            venue,
            description,
        } => {
            require_admin(&store)?;
            commands::new::run(&store, title, date, venue, description)
        }
        Commands::Update {
            id,
            title,
            date,
            venue,
            description,
        } => {
            require_admin(&store)?;
            commands::update::run(&store, id, title, date, venue, description)
        }
        Commands::Delete { id } => {
            require_admin(&store)?;
            commands::delete::run(&store, id)
        }
        Commands::Attend { event_id, name } => commands::attend::run(&store, event_id, &name),
        Commands::Attendances { event_id } => {
            require_admin(&store)?;
            commands::attendances::run(&store, event_id)
        }
        Commands::Export { output } => {
            require_admin(&store)?;
            commands::export::run(&store, output)
        }
        Commands::Share { event_id, open } => commands::share::run(&store, event_id, open),
    }
}

/// Prompt for the admin credential before private operations.
fn require_admin(store: &Store) -> Result<()> {
    let username: String = dialoguer::Input::new()
        .with_prompt("Admin user")
        .default("admin".to_string())
        .interact_text()?;
    let password = rpassword::prompt_password("Password: ")?;

    if !store.validate_user(&username, &password)? {
        anyhow::bail!("Invalid username or password");
    }

    Ok(())
}
