//! # Schedule Feature
//!
//! Read-only store for the dated care schedule.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod store;

pub use store::{Appointment, Medication, ScheduleEntry, ScheduleStore};
