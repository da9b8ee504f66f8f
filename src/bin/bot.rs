//! Reminder bot daemon.
//!
//! Loads the schedule once at startup, then either backfills an explicit
//! date (REMINDER_DATE set: run all three reminder types once and exit) or
//! runs the daily trigger loop forever.

use anyhow::{Context, Result};
use dotenvy::dotenv;
use log::info;
use std::sync::Arc;

use caretaker::core::Config;
use caretaker::features::delivery::{Dispatcher, TelegramDispatcher};
use caretaker::features::reminders::{reminder_trigger_loop, run_job, DrugIcons};
use caretaker::features::schedule::ScheduleStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting Caretaker Reminder Bot...");

    // Operating on an empty or partial schedule is worse than not running.
    let store = Arc::new(
        ScheduleStore::load(&config.schedule_path)
            .context("FATAL: Could not load schedule data")?,
    );

    let dispatcher: Arc<dyn Dispatcher> = Arc::new(TelegramDispatcher::new(
        config.telegram_bot_token.clone(),
        config.telegram_chat_ids.clone(),
    ));
    let icons = DrugIcons::standard();

    if let Some(base_date) = config.reminder_date {
        // Backfill: one pass over all three reminder types for the
        // operator-chosen date, then exit.
        info!("--- Running for specific date: {base_date} ---");
        for reminder_type in ["morning", "evening", "late_night"] {
            run_job(reminder_type, base_date, &store, &dispatcher, &icons).await?;
        }
        return Ok(());
    }

    reminder_trigger_loop(config, store, dispatcher, icons).await;
    Ok(())
}
