//! Upcoming-birthday listing.

use std::error::Error;
use std::path::PathBuf;

use chrono::Utc;
use touchbase_core::{days_until_birthday, Contact};

use crate::roster;

pub fn run(file: Option<PathBuf>, within: i64, json: bool) -> Result<(), Box<dyn Error>> {
    let path = roster::resolve_path(file)?;
    let contacts = roster::load(&path)?;
    let now = Utc::now();

    let mut upcoming: Vec<(i64, &Contact)> = contacts
        .iter()
        .filter(|c| c.birthday.is_some())
        .map(|c| (days_until_birthday(c.birthday.as_ref(), now), c))
        .filter(|(days, _)| *days <= within)
        .collect();
    upcoming.sort_by_key(|(days, _)| *days);

    if json {
        let entries: Vec<_> = upcoming
            .iter()
            .map(|(days, c)| {
                serde_json::json!({
                    "id": c.id,
                    "name": c.name,
                    "birthday": c.birthday.as_ref().map(ToString::to_string),
                    "days_until": days,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if upcoming.is_empty() {
        println!("No birthdays in the next {within} days.");
        return Ok(());
    }

    for (days, contact) in upcoming {
        let Some(birthday) = contact.birthday.as_ref() else {
            continue;
        };
        let when = match days {
            0 => "today!".to_string(),
            1 => "tomorrow".to_string(),
            n => format!("in {n} days"),
        };
        println!("{birthday}  {} ({when})", contact.name);
    }
    Ok(())
}
