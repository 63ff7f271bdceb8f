//! Contact records and their pure state transitions.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::birthday::Birthday;
use crate::error::EngineError;

/// A person to stay in touch with.
///
/// Scheduling reads `last_contacted`, `frequency_days`,
/// `preferred_day_of_week`, `birthday`, and `snoozed_until`; everything else
/// is opaque to the engine. Records are never mutated in place: transitions
/// return updated copies and scoring decorates clones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// `None` means never contacted and behaves as the epoch in due-date math.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_contacted: Option<DateTime<Utc>>,
    /// Desired minimum days between contacts. Always positive.
    pub frequency_days: i64,
    /// 0 = Sunday ... 6 = Saturday. Absent means no weekday alignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_day_of_week: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
    /// While in the future, the contact is suppressed from urgency ranking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snoozed_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Create a contact that has never been reached out to.
    pub fn new(name: impl Into<String>, frequency_days: i64, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            note: None,
            last_contacted: None,
            frequency_days,
            preferred_day_of_week: None,
            birthday: None,
            snoozed_until: None,
            created_at: now,
        }
    }

    /// Check the scheduling fields against the engine's input contract.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.frequency_days < 1 {
            return Err(EngineError::InvalidCadence {
                days: self.frequency_days,
            });
        }
        if let Some(day) = self.preferred_day_of_week {
            if day > 6 {
                return Err(EngineError::InvalidWeekday { value: day });
            }
        }
        Ok(())
    }

    /// Whether the contact is snoozed as of `now`.
    pub fn is_snoozed(&self, now: DateTime<Utc>) -> bool {
        self.snoozed_until.is_some_and(|until| until > now)
    }

    /// Record an outreach: stamps `last_contacted` and lifts any snooze.
    pub fn mark_contacted(&self, now: DateTime<Utc>) -> Self {
        Self {
            last_contacted: Some(now),
            snoozed_until: None,
            ..self.clone()
        }
    }

    /// Suppress the contact from ranking for `days` days from `now`.
    pub fn snoozed_for_days(&self, days: i64, now: DateTime<Utc>) -> Self {
        Self {
            snoozed_until: Some(now + Duration::days(days)),
            ..self.clone()
        }
    }

    /// Lift an active snooze.
    pub fn with_snooze_cleared(&self) -> Self {
        Self {
            snoozed_until: None,
            ..self.clone()
        }
    }
}
