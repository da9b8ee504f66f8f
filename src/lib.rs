// Core layer - shared configuration and messaging utilities
pub mod core;

// Features layer - all feature modules
pub mod features;

// Re-export core config for convenience
pub use crate::core::Config;

// Re-export feature items for convenience
pub use features::{
    // Delivery
    Dispatcher, TelegramDispatcher,
    // Reminders
    generate_reminder_content, reminder_trigger_loop, run_job, DrugIcons, ReminderContent,
    ReminderType,
    // Schedule
    Appointment, Medication, ScheduleEntry, ScheduleStore,
};
