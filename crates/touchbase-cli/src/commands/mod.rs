pub mod birthdays;
pub mod config;
pub mod contact;
pub mod due;
pub mod queue;
