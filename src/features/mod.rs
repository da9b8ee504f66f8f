//! # Features Layer
//!
//! Feature modules for the reminder bot: schedule loading, reminder content
//! generation and triggering, and message delivery.

pub mod delivery;
pub mod reminders;
pub mod schedule;

pub use delivery::{Dispatcher, TelegramDispatcher};
pub use reminders::{
    generate_reminder_content, reminder_trigger_loop, run_job, DrugIcons, ReminderContent,
    ReminderType,
};
pub use schedule::{Appointment, Medication, ScheduleEntry, ScheduleStore};
