//! Next-due-date computation.
//!
//! The due date is the last contact plus the cadence gap, optionally snapped
//! forward to the next occurrence of a preferred weekday. The snap never
//! moves backward: after a late check-in the rhythm re-anchors to the
//! preferred day rather than to the literal last-contact timestamp, even
//! when that stretches a single cycle past `frequency_days`.

use chrono::{DateTime, Datelike, Duration, Utc};

use crate::contact::Contact;

/// When the contact should next be engaged.
pub fn next_due_date(contact: &Contact) -> DateTime<Utc> {
    let last = contact.last_contacted.unwrap_or(DateTime::UNIX_EPOCH);
    let due = last + Duration::days(contact.frequency_days);

    let Some(target) = contact.preferred_day_of_week else {
        return due;
    };

    let current = i64::from(due.weekday().num_days_from_sunday());
    let mut days_to_add = i64::from(target) - current;
    if days_to_add < 0 {
        days_to_add += 7;
    }
    due + Duration::days(days_to_add)
}

/// Whether the contact's due date has arrived as of `now`.
pub fn is_due(contact: &Contact, now: DateTime<Utc>) -> bool {
    next_due_date(contact) <= now
}
