//! Due-date lookup for a single contact.

use std::error::Error;
use std::path::PathBuf;

use chrono::Utc;
use touchbase_core::next_due_date;

use crate::roster;

pub fn run(file: Option<PathBuf>, query: &str) -> Result<(), Box<dyn Error>> {
    let path = roster::resolve_path(file)?;
    let contacts = roster::load(&path)?;
    let Some(contact) = roster::find(&contacts, query) else {
        return Err(format!("no contact matching '{query}'").into());
    };

    let now = Utc::now();
    let due = next_due_date(contact);

    println!("{}", contact.name);
    match contact.last_contacted {
        Some(last) => println!("  last contacted: {}", last.format("%Y-%m-%d")),
        None => println!("  last contacted: never"),
    }
    println!("  cadence: every {} days", contact.frequency_days);
    if let Some(day) = contact.preferred_day_of_week {
        println!("  preferred day: {}", weekday_name(day));
    }
    println!("  next due: {}", due.format("%Y-%m-%d %H:%M UTC"));
    if due <= now {
        println!("  status: overdue by {} days", (now - due).num_days());
    } else {
        println!("  status: due in {} days", (due - now).num_days());
    }
    Ok(())
}

fn weekday_name(day: u8) -> &'static str {
    match day {
        0 => "Sunday",
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        4 => "Thursday",
        5 => "Friday",
        6 => "Saturday",
        _ => "?",
    }
}
