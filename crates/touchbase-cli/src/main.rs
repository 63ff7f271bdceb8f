use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod roster;

#[derive(Parser)]
#[command(name = "touchbase", version, about = "Touchbase CLI")]
struct Cli {
    /// Contacts file (defaults to the configured path)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Outreach queue, most urgent first
    Queue {
        /// Emit scored contacts as JSON
        #[arg(long)]
        json: bool,
    },
    /// Next due date for one contact
    Due {
        /// Contact name or id prefix
        query: String,
    },
    /// Upcoming birthdays
    Birthdays {
        /// Lookahead window in days
        #[arg(long, default_value = "14")]
        within: i64,
        /// Emit matches as JSON
        #[arg(long)]
        json: bool,
    },
    /// Roster management
    Contact {
        #[command(subcommand)]
        action: commands::contact::ContactAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Queue { json } => commands::queue::run(cli.file, json),
        Commands::Due { query } => commands::due::run(cli.file, &query),
        Commands::Birthdays { within, json } => commands::birthdays::run(cli.file, within, json),
        Commands::Contact { action } => commands::contact::run(cli.file, action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
