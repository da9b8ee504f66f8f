//! Daily trigger loop: fires the three reminder slots at configured
//! wall-clock times.
//!
//! The content generator knows nothing about clocks; this loop owns "now",
//! picks the next slot, sleeps until it, and invokes the generator with the
//! current local date. `next_fire` is kept pure so the slot arithmetic is
//! testable without waiting for the wall clock.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use chrono::{Duration, Local, NaiveDateTime, NaiveTime};
use log::{error, info};
use std::sync::Arc;

use crate::core::Config;
use crate::features::delivery::Dispatcher;
use crate::features::reminders::content::generate_reminder_content;
use crate::features::reminders::presentation::DrugIcons;
use crate::features::schedule::ScheduleStore;

/// One configured daily firing: a reminder type at a local time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerSlot {
    pub reminder_type: &'static str,
    pub at: NaiveTime,
}

/// Build the three daily slots from configuration.
pub fn daily_slots(config: &Config) -> Vec<TriggerSlot> {
    vec![
        TriggerSlot { reminder_type: "morning", at: config.morning_time },
        TriggerSlot { reminder_type: "evening", at: config.evening_time },
        TriggerSlot { reminder_type: "late_night", at: config.late_night_time },
    ]
}

/// Earliest slot firing strictly after `now`: the next remaining slot today,
/// else the earliest slot tomorrow.
pub fn next_fire(now: NaiveDateTime, slots: &[TriggerSlot]) -> (TriggerSlot, NaiveDateTime) {
    debug_assert!(!slots.is_empty());

    let today = now.date();
    let mut best: Option<(TriggerSlot, NaiveDateTime)> = None;

    for slot in slots {
        let mut fire_at = today.and_time(slot.at);
        if fire_at <= now {
            fire_at += Duration::days(1);
        }
        match &best {
            Some((_, current)) if *current <= fire_at => {}
            _ => best = Some((*slot, fire_at)),
        }
    }

    // slots is never empty: daily_slots always yields three.
    best.unwrap_or((slots[0], now + Duration::days(1)))
}

/// Run forever, firing each slot at its configured local time.
pub async fn reminder_trigger_loop(
    config: Config,
    store: Arc<ScheduleStore>,
    dispatcher: Arc<dyn Dispatcher>,
    icons: DrugIcons,
) {
    let slots = daily_slots(&config);

    info!("--- Reminder Scheduler Started ---");
    for slot in &slots {
        info!("Scheduled job: {} at {}", slot.reminder_type, slot.at.format("%H:%M"));
    }
    info!("----------------------------------");

    loop {
        let now = Local::now().naive_local();
        let (slot, fire_at) = next_fire(now, &slots);

        let wait = (fire_at - now)
            .to_std()
            .unwrap_or(std::time::Duration::ZERO);
        info!(
            "Next job: '{}' at {} (in {}s)",
            slot.reminder_type,
            fire_at.format("%Y-%m-%d %H:%M"),
            wait.as_secs()
        );
        tokio::time::sleep(wait).await;

        let base_date = Local::now().date_naive();
        if let Err(e) = run_job(slot.reminder_type, base_date, &store, &dispatcher, &icons).await {
            error!("Job '{}' failed: {e:#}", slot.reminder_type);
        }
    }
}

/// Generate content for one slot and hand it to the dispatcher when it is
/// worth sending. Shared by the scheduler loop and the backfill path.
pub async fn run_job(
    reminder_type: &str,
    base_date: chrono::NaiveDate,
    store: &ScheduleStore,
    dispatcher: &Arc<dyn Dispatcher>,
    icons: &DrugIcons,
) -> Result<()> {
    info!("Running job for reminder_type: '{reminder_type}' (base date {base_date})");

    let content = generate_reminder_content(reminder_type, base_date, store, icons);

    if content.should_send {
        dispatcher.deliver(&content.subject, &content.body).await?;
    } else {
        info!("No items to report for '{reminder_type}' reminder. Skipping notification.");
    }

    Ok(())
}
