//! # Reminders Feature
//!
//! Daily reminder content generation and wall-clock triggering.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Injected drug presentation map, pure next_fire slot arithmetic
//! - 1.0.0: Initial release with three daily templates

pub mod content;
pub mod presentation;
pub mod trigger;

pub use content::{generate_reminder_content, ReminderContent, ReminderType};
pub use presentation::DrugIcons;
pub use trigger::{daily_slots, next_fire, reminder_trigger_loop, run_job, TriggerSlot};
