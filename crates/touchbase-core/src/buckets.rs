//! Display buckets over scored contacts.
//!
//! Downstream presentation groups the ranked roster into four buckets.
//! These rules consume `score`, `birthday_upcoming`, and the snooze state
//! exactly as scoring defines them; they never feed back into ordering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::ScoredContact;

/// Display classification for a scored contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bucket {
    /// Due date at or past `now`, nothing suppressing it.
    NeedsAttention,
    /// Birthday inside the imminent window.
    Birthday,
    /// Not yet due.
    Upcoming,
    /// Actively snoozed.
    Snoozed,
}

/// Classify one scored contact at the same `now` the scoring pass used.
pub fn classify(scored: &ScoredContact, now: DateTime<Utc>) -> Bucket {
    if scored.contact.is_snoozed(now) {
        Bucket::Snoozed
    } else if scored.birthday_upcoming {
        Bucket::Birthday
    } else if scored.score >= 0 {
        Bucket::NeedsAttention
    } else {
        Bucket::Upcoming
    }
}

/// A ranked roster split into buckets, ranked order preserved within each.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Partition {
    pub needs_attention: Vec<ScoredContact>,
    pub birthday: Vec<ScoredContact>,
    pub upcoming: Vec<ScoredContact>,
    pub snoozed: Vec<ScoredContact>,
}

/// Split a ranked roster into buckets.
pub fn partition(scored: Vec<ScoredContact>, now: DateTime<Utc>) -> Partition {
    let mut out = Partition::default();
    for item in scored {
        match classify(&item, now) {
            Bucket::NeedsAttention => out.needs_attention.push(item),
            Bucket::Birthday => out.birthday.push(item),
            Bucket::Upcoming => out.upcoming.push(item),
            Bucket::Snoozed => out.snoozed.push(item),
        }
    }
    out
}
