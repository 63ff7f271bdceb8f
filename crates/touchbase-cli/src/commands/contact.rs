//! Roster management commands.

use std::error::Error;
use std::path::PathBuf;

use chrono::{Duration, Utc};
use clap::Subcommand;
use touchbase_core::{Birthday, Contact};

use crate::config::Config;
use crate::roster;

#[derive(Subcommand)]
pub enum ContactAction {
    /// Add a contact
    Add {
        /// Display name
        name: String,
        /// Cadence in days (default from config)
        #[arg(long)]
        frequency_days: Option<i64>,
        /// Birthday, "MM-DD" or "YYYY-MM-DD"
        #[arg(long)]
        birthday: Option<String>,
        /// Preferred weekday, 0 = Sunday through 6 = Saturday
        #[arg(long)]
        preferred_day: Option<u8>,
        /// Free-form note
        #[arg(long)]
        note: Option<String>,
    },
    /// List contacts
    List {
        /// Emit the roster as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove a contact
    Remove {
        /// Contact name or id prefix
        query: String,
    },
    /// Record an outreach now
    Touch {
        /// Contact name or id prefix
        query: String,
    },
    /// Snooze a contact
    Snooze {
        /// Contact name or id prefix
        query: String,
        /// Days to snooze for
        #[arg(long, default_value = "7")]
        days: i64,
    },
    /// Lift a snooze
    Unsnooze {
        /// Contact name or id prefix
        query: String,
    },
}

pub fn run(file: Option<PathBuf>, action: ContactAction) -> Result<(), Box<dyn Error>> {
    let path = roster::resolve_path(file)?;
    let mut contacts = roster::load(&path)?;
    let now = Utc::now();

    match action {
        ContactAction::Add {
            name,
            frequency_days,
            birthday,
            preferred_day,
            note,
        } => {
            let frequency_days = match frequency_days {
                Some(days) => days,
                None => Config::load_or_default().default_frequency_days,
            };
            let mut contact = Contact::new(name, frequency_days, now);
            if let Some(s) = birthday {
                contact.birthday = Some(Birthday::parse(&s)?);
            }
            contact.preferred_day_of_week = preferred_day;
            contact.note = note;
            contact.validate()?;

            println!("Contact added: {} ({})", contact.name, contact.id);
            contacts.push(contact);
            roster::save(&path, &contacts)?;
        }
        ContactAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&contacts)?);
            } else if contacts.is_empty() {
                println!("No contacts.");
            } else {
                for contact in &contacts {
                    println!(
                        "{}  every {} days  [{}]",
                        contact.name,
                        contact.frequency_days,
                        &contact.id[..8]
                    );
                }
            }
        }
        ContactAction::Remove { query } => {
            let idx = find_required(&contacts, &query)?;
            let removed = contacts.remove(idx);
            roster::save(&path, &contacts)?;
            println!("Removed {}", removed.name);
        }
        ContactAction::Touch { query } => {
            let idx = find_required(&contacts, &query)?;
            let touched = contacts[idx].mark_contacted(now);
            contacts[idx] = touched;
            roster::save(&path, &contacts)?;
            println!("Marked {} as contacted", contacts[idx].name);
        }
        ContactAction::Snooze { query, days } => {
            let idx = find_required(&contacts, &query)?;
            let snoozed = contacts[idx].snoozed_for_days(days, now);
            contacts[idx] = snoozed;
            roster::save(&path, &contacts)?;
            println!(
                "Snoozed {} until {}",
                contacts[idx].name,
                (now + Duration::days(days)).format("%Y-%m-%d")
            );
        }
        ContactAction::Unsnooze { query } => {
            let idx = find_required(&contacts, &query)?;
            let cleared = contacts[idx].with_snooze_cleared();
            contacts[idx] = cleared;
            roster::save(&path, &contacts)?;
            println!("Unsnoozed {}", contacts[idx].name);
        }
    }
    Ok(())
}

fn find_required(contacts: &[Contact], query: &str) -> Result<usize, Box<dyn Error>> {
    roster::find_index(contacts, query)
        .ok_or_else(|| format!("no contact matching '{query}'").into())
}
