//! Urgency scoring and ranking.
//!
//! One signed score totals-orders the roster. Three bands, checked in
//! strict order per contact:
//!
//! 1. Snoozed contacts pin to [`SNOOZED_SCORE`] and sort below every
//!    active contact, however overdue or birthday-imminent they are.
//! 2. A birthday 0-14 days out scores `20_000 - days`, so closer birthdays
//!    rank higher and the whole band sits above every not-yet-due contact.
//! 3. Otherwise the score is `now - due_date` in milliseconds: positive and
//!    growing while overdue, negative while the due date is still ahead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::birthday::days_until_birthday;
use crate::cadence::next_due_date;
use crate::contact::Contact;

/// Fixed score for snoozed contacts.
pub const SNOOZED_SCORE: i64 = -100_000;
/// Top of the birthday band; a birthday `d` days out scores `BASE - d`.
pub const BIRTHDAY_SCORE_BASE: i64 = 20_000;
/// Lookahead window during which a birthday overrides due-date urgency.
pub const BIRTHDAY_WINDOW_DAYS: i64 = 14;

/// A contact decorated with the outcome of one scoring pass.
///
/// `score` and `birthday_upcoming` are recomputed from `(contact, now)` on
/// every pass; they are outputs, never stored truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredContact {
    pub contact: Contact,
    pub score: i64,
    pub birthday_upcoming: bool,
}

/// Score a single contact at `now`.
pub fn score_contact(contact: &Contact, now: DateTime<Utc>) -> ScoredContact {
    if contact.is_snoozed(now) {
        return ScoredContact {
            contact: contact.clone(),
            score: SNOOZED_SCORE,
            birthday_upcoming: false,
        };
    }

    let days_to_birthday = days_until_birthday(contact.birthday.as_ref(), now);
    if (0..=BIRTHDAY_WINDOW_DAYS).contains(&days_to_birthday) {
        return ScoredContact {
            contact: contact.clone(),
            score: BIRTHDAY_SCORE_BASE - days_to_birthday,
            birthday_upcoming: true,
        };
    }

    let due = next_due_date(contact);
    ScoredContact {
        contact: contact.clone(),
        score: (now - due).num_milliseconds(),
        birthday_upcoming: false,
    }
}

/// Score every contact and order the result most urgent first.
///
/// Ties carry no contractual order; the sort happens to be stable.
pub fn rank(contacts: &[Contact], now: DateTime<Utc>) -> Vec<ScoredContact> {
    let mut scored: Vec<ScoredContact> = contacts
        .iter()
        .map(|contact| score_contact(contact, now))
        .collect();
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::birthday::Birthday;
    use chrono::{Duration, NaiveDate};

    const MS_PER_DAY: i64 = 86_400_000;

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
            .and_utc()
    }

    /// Seen `days_ago` days before `now`, so with cadence 7 the contact is
    /// overdue by `days_ago - 7` days.
    fn seen_days_ago(name: &str, days_ago: i64, now: DateTime<Utc>) -> Contact {
        let mut contact = Contact::new(name, 7, now);
        contact.last_contacted = Some(now - Duration::days(days_ago));
        contact
    }

    #[test]
    fn overdue_contact_scores_lateness_in_millis() {
        let now = utc(2024, 6, 20);
        let overdue = seen_days_ago("Alice", 9, now);
        let scored = score_contact(&overdue, now);
        assert_eq!(scored.score, 2 * MS_PER_DAY);
        assert!(!scored.birthday_upcoming);
    }

    #[test]
    fn future_due_date_scores_negative() {
        let now = utc(2024, 6, 20);
        let ahead = seen_days_ago("Bob", 2, now);
        assert_eq!(score_contact(&ahead, now).score, -5 * MS_PER_DAY);
    }

    #[test]
    fn snooze_overrides_everything() {
        let now = utc(2024, 6, 20);
        // Ten days overdue AND birthday tomorrow, but snoozed until tomorrow.
        let mut contact = seen_days_ago("Carol", 17, now);
        contact.birthday = Some(Birthday::parse("06-21").unwrap());
        let snoozed = contact.snoozed_for_days(1, now);

        let scored = score_contact(&snoozed, now);
        assert_eq!(scored.score, SNOOZED_SCORE);
        assert!(!scored.birthday_upcoming);
    }

    #[test]
    fn expired_snooze_is_ignored() {
        let now = utc(2024, 6, 20);
        let mut contact = seen_days_ago("Carol", 9, now);
        contact.snoozed_until = Some(now - Duration::days(1));
        assert_eq!(score_contact(&contact, now).score, 2 * MS_PER_DAY);
    }

    #[test]
    fn birthday_window_scores_closer_higher() {
        let now = utc(2024, 6, 20);
        let mut contact = seen_days_ago("Dan", 2, now);

        contact.birthday = Some(Birthday::parse("06-20").unwrap());
        let today = score_contact(&contact, now);
        assert!(today.birthday_upcoming);
        assert_eq!(today.score, BIRTHDAY_SCORE_BASE);

        contact.birthday = Some(Birthday::parse("07-04").unwrap());
        let edge = score_contact(&contact, now);
        assert!(edge.birthday_upcoming);
        assert_eq!(edge.score, BIRTHDAY_SCORE_BASE - 14);

        // One day past the window falls through to due-date scoring.
        contact.birthday = Some(Birthday::parse("07-05").unwrap());
        let outside = score_contact(&contact, now);
        assert!(!outside.birthday_upcoming);
        assert_eq!(outside.score, -5 * MS_PER_DAY);
    }

    #[test]
    fn birthday_band_outranks_every_future_due_date() {
        let now = utc(2024, 6, 20);
        let mut birthday_contact = seen_days_ago("Dan", 1, now);
        birthday_contact.birthday = Some(Birthday::parse("07-04").unwrap());
        let birthday_score = score_contact(&birthday_contact, now).score;

        // Even a contact due a moment from now scores below the band.
        let mut imminent = Contact::new("Eve", 365, now);
        imminent.last_contacted = Some(now + Duration::milliseconds(1) - Duration::days(365));
        let imminent_score = score_contact(&imminent, now).score;

        assert!(imminent_score < 0);
        assert!(birthday_score > imminent_score);
    }

    #[test]
    fn ranking_three_way_ordering() {
        let now = utc(2024, 6, 20);
        // Overdue by 2 days, due in 5 days, and snoozed-but-overdue.
        let overdue = seen_days_ago("Overdue", 9, now);
        let ahead = seen_days_ago("Ahead", 2, now);
        let snoozed = seen_days_ago("Snoozed", 17, now).snoozed_for_days(1, now);

        let ranked = rank(&[ahead, snoozed, overdue], now);
        let names: Vec<&str> = ranked.iter().map(|s| s.contact.name.as_str()).collect();

        // The snoozed floor (-100_000) still sits above a far-future due
        // date (-432_000_000).
        assert_eq!(names, ["Overdue", "Snoozed", "Ahead"]);
        assert_eq!(ranked[0].score, 2 * MS_PER_DAY);
        assert_eq!(ranked[1].score, SNOOZED_SCORE);
        assert_eq!(ranked[2].score, -5 * MS_PER_DAY);
    }

    #[test]
    fn ranking_is_idempotent() {
        let now = utc(2024, 6, 20);
        let mut birthday_contact = seen_days_ago("Birthday", 3, now);
        birthday_contact.birthday = Some(Birthday::parse("06-25").unwrap());
        let contacts = vec![
            seen_days_ago("Overdue", 12, now),
            birthday_contact,
            seen_days_ago("Ahead", 1, now),
            seen_days_ago("Snoozed", 20, now).snoozed_for_days(2, now),
        ];

        let first = rank(&contacts, now);
        let second = rank(&contacts, now);
        assert_eq!(first, second);
    }

    #[test]
    fn scoring_does_not_mutate_input() {
        let now = utc(2024, 6, 20);
        let contact = seen_days_ago("Alice", 9, now);
        let before = contact.clone();
        let _ = score_contact(&contact, now);
        let _ = rank(std::slice::from_ref(&contact), now);
        assert_eq!(contact, before);
    }
}
