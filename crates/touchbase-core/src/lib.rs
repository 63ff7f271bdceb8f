//! # Touchbase Core Library
//!
//! This library provides the core business logic for Touchbase: given a
//! roster of contacts, it decides when each one is next due for outreach
//! and how urgently, producing a total ordering of the roster by urgency.
//! All operations are available to any frontend; the CLI binary is a thin
//! consumer over this same library.
//!
//! ## Architecture
//!
//! Three pure, stateless components, leaves first:
//!
//! - **Birthday proximity**: days until the next occurrence of a contact's
//!   birthday, with year rollover
//! - **Cadence**: last contact plus the cadence gap, optionally snapped
//!   forward to a preferred weekday
//! - **Scoring**: snooze state, birthday window, and due-date lateness
//!   folded into one signed comparable score
//!
//! The engine performs no I/O and holds no state between calls. "Now" is
//! always an explicit parameter, so scoring the same `(contacts, now)` pair
//! twice yields identical output.
//!
//! ## Key Components
//!
//! - [`Contact`]: the roster record and its pure state transitions
//! - [`days_until_birthday`]: birthday proximity calculator
//! - [`next_due_date`]: next-due-date calculator
//! - [`score_contact`] / [`rank`]: priority scorer and ranking
//! - [`partition`]: display-bucket classification over a ranked roster

pub mod birthday;
pub mod buckets;
pub mod cadence;
pub mod contact;
pub mod error;
pub mod scoring;

pub use birthday::{days_until_birthday, Birthday, NO_BIRTHDAY_SENTINEL};
pub use buckets::{classify, partition, Bucket, Partition};
pub use cadence::{is_due, next_due_date};
pub use contact::Contact;
pub use error::EngineError;
pub use scoring::{
    rank, score_contact, ScoredContact, BIRTHDAY_SCORE_BASE, BIRTHDAY_WINDOW_DAYS, SNOOZED_SCORE,
};
