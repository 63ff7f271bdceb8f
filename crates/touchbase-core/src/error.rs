//! Core error types for touchbase-core.
//!
//! The engine is total over its documented input domain; these errors exist
//! for the contract boundary. Malformed fields are rejected when a contact
//! is parsed or validated, never during a scoring pass.

use thiserror::Error;

/// Contract-violation errors for contact input fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Birthday string is not `"MM-DD"` or `"YYYY-MM-DD"`
    #[error("invalid birthday '{value}': expected \"MM-DD\" or \"YYYY-MM-DD\"")]
    InvalidBirthday { value: String },

    /// Cadence must be at least one day
    #[error("invalid cadence: frequency_days must be positive, got {days}")]
    InvalidCadence { days: i64 },

    /// Preferred weekday must be 0 (Sunday) through 6 (Saturday)
    #[error("invalid preferred weekday {value}: expected 0 (Sunday) through 6 (Saturday)")]
    InvalidWeekday { value: u8 },
}
