//! Integration tests for the full scheduling pipeline.
//!
//! These tests walk realistic rosters through birthday proximity, due-date
//! computation, scoring, and bucket classification together, pinning the
//! exact values the score bands promise.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use touchbase_core::{
    days_until_birthday, next_due_date, partition, rank, Birthday, Contact, SNOOZED_SCORE,
};

const MS_PER_DAY: i64 = 86_400_000;

fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
        .and_utc()
}

fn seen_on(name: &str, last: DateTime<Utc>, frequency_days: i64) -> Contact {
    let mut contact = Contact::new(name, frequency_days, last);
    contact.last_contacted = Some(last);
    contact
}

#[test]
fn christmas_birthday_seen_from_december_20th() {
    let birthday = Birthday::parse("12-25").unwrap();
    assert_eq!(days_until_birthday(Some(&birthday), utc(2023, 12, 20, 8)), 5);
}

#[test]
fn new_years_birthday_rolls_into_next_year() {
    let birthday = Birthday::parse("01-01").unwrap();
    assert_eq!(days_until_birthday(Some(&birthday), utc(2023, 12, 30, 8)), 2);
}

#[test]
fn friday_cadence_snaps_to_following_monday() {
    // 2024-06-07 is a Friday. A weekly cadence puts the raw due date on the
    // next Friday; preferring Monday lands three days later.
    let mut contact = seen_on("Frida", utc(2024, 6, 7, 12), 7);
    contact.preferred_day_of_week = Some(1);

    let due = next_due_date(&contact);
    assert_eq!(due, utc(2024, 6, 17, 12));
    assert_eq!(due.weekday().num_days_from_sunday(), 1);
}

#[test]
fn full_roster_ordering_and_buckets() {
    let now = utc(2024, 6, 20, 10);

    // Overdue by 2 days.
    let overdue = seen_on("Overdue", now - Duration::days(9), 7);
    // Due in 5 days.
    let ahead = seen_on("Ahead", now - Duration::days(2), 7);
    // 10 days overdue but snoozed until tomorrow.
    let snoozed = seen_on("Snoozed", now - Duration::days(17), 7).snoozed_for_days(1, now);
    // Birthday in 4 days; would otherwise be merely a day overdue.
    let mut birthday_soon = seen_on("Birthday", now - Duration::days(8), 7);
    birthday_soon.birthday = Some(Birthday::parse("06-24").unwrap());

    let ranked = rank(&[ahead, birthday_soon, snoozed, overdue], now);
    let names: Vec<&str> = ranked.iter().map(|s| s.contact.name.as_str()).collect();

    // Due-date lateness is measured in milliseconds, so a contact overdue
    // by whole days outranks the birthday band; the band still beats every
    // not-yet-due contact, and the snooze floor sits between the two
    // negative regions.
    assert_eq!(names, ["Overdue", "Birthday", "Snoozed", "Ahead"]);
    assert_eq!(ranked[0].score, 2 * MS_PER_DAY);
    assert_eq!(ranked[1].score, 20_000 - 4);
    assert!(ranked[1].birthday_upcoming);
    assert_eq!(ranked[2].score, SNOOZED_SCORE);
    assert_eq!(ranked[3].score, -5 * MS_PER_DAY);

    let groups = partition(ranked, now);
    assert_eq!(groups.needs_attention.len(), 1);
    assert_eq!(groups.birthday.len(), 1);
    assert_eq!(groups.upcoming.len(), 1);
    assert_eq!(groups.snoozed.len(), 1);
}

#[test]
fn rescoring_after_an_outreach_resets_urgency() {
    let now = utc(2024, 6, 20, 10);
    let overdue = seen_on("Alice", now - Duration::days(30), 7);
    assert!(rank(std::slice::from_ref(&overdue), now)[0].score > 0);

    let touched = overdue.mark_contacted(now);
    let rescored = rank(std::slice::from_ref(&touched), now);
    assert_eq!(rescored[0].score, -7 * MS_PER_DAY);
}

#[test]
fn snooze_expiry_restores_normal_ranking() {
    let now = utc(2024, 6, 20, 10);
    let contact = seen_on("Bob", now - Duration::days(9), 7).snoozed_for_days(1, now);

    assert_eq!(rank(std::slice::from_ref(&contact), now)[0].score, SNOOZED_SCORE);

    let later = now + Duration::days(2);
    let rescored = rank(std::slice::from_ref(&contact), later);
    assert_eq!(rescored[0].score, 4 * MS_PER_DAY);
}
