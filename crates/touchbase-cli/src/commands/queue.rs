//! Outreach queue command.

use std::error::Error;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use touchbase_core::{days_until_birthday, next_due_date, partition, rank, ScoredContact};

use crate::roster;

pub fn run(file: Option<PathBuf>, json: bool) -> Result<(), Box<dyn Error>> {
    let path = roster::resolve_path(file)?;
    let contacts = roster::load(&path)?;
    let now = Utc::now();

    let scored = rank(&contacts, now);
    if json {
        println!("{}", serde_json::to_string_pretty(&scored)?);
        return Ok(());
    }

    if scored.is_empty() {
        println!("No contacts yet. Add one with `touchbase contact add <name>`.");
        return Ok(());
    }

    let groups = partition(scored, now);
    print_group("Needs attention", &groups.needs_attention, now);
    print_group("Birthdays", &groups.birthday, now);
    print_group("Upcoming", &groups.upcoming, now);
    print_group("Snoozed", &groups.snoozed, now);
    Ok(())
}

fn print_group(title: &str, scored: &[ScoredContact], now: DateTime<Utc>) {
    if scored.is_empty() {
        return;
    }
    println!("{title}:");
    for item in scored {
        println!("  {}  ({})", item.contact.name, describe(item, now));
    }
}

fn describe(scored: &ScoredContact, now: DateTime<Utc>) -> String {
    if let Some(until) = scored.contact.snoozed_until.filter(|u| *u > now) {
        return format!("snoozed until {}", until.format("%Y-%m-%d"));
    }

    if scored.birthday_upcoming {
        let days = days_until_birthday(scored.contact.birthday.as_ref(), now);
        return match days {
            0 => "birthday today!".to_string(),
            1 => "birthday tomorrow".to_string(),
            n => format!("birthday in {n} days"),
        };
    }

    let due = next_due_date(&scored.contact);
    if due <= now {
        let days = (now - due).num_days();
        if days == 0 {
            "due now".to_string()
        } else {
            format!("overdue by {days} day{}", plural(days))
        }
    } else {
        let days = (due - now).num_days();
        if days == 0 {
            "due within a day".to_string()
        } else {
            format!("due in {days} day{}", plural(days))
        }
    }
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
