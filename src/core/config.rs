//! Environment-variable configuration.
//!
//! All runtime knobs come from the environment (a `.env` file is honored via
//! dotenvy in the binaries). `Config::from_env` fails fast with a named
//! variable in the error so a half-configured deployment cannot limp along.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use std::env;

/// Runtime configuration for the reminder bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram Bot API token.
    pub telegram_bot_token: String,
    /// Chat ids to deliver to, from a comma-separated list.
    pub telegram_chat_ids: Vec<String>,
    /// Path to the schedule JSON file.
    pub schedule_path: String,
    /// Backfill override: run all three reminders once for this date and exit.
    pub reminder_date: Option<NaiveDate>,
    pub morning_time: NaiveTime,
    pub evening_time: NaiveTime,
    pub late_night_time: NaiveTime,
    /// Default env_logger filter.
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let telegram_bot_token = env::var("TELEGRAM_BOT_TOKEN")
            .context("TELEGRAM_BOT_TOKEN environment variable not set")?;
        let chat_ids_raw = env::var("TELEGRAM_CHAT_IDS")
            .context("TELEGRAM_CHAT_IDS environment variable not set")?;
        let telegram_chat_ids = parse_chat_ids(&chat_ids_raw);
        if telegram_chat_ids.is_empty() {
            anyhow::bail!("TELEGRAM_CHAT_IDS is set but contains no chat ids");
        }

        let schedule_path =
            env::var("SCHEDULE_PATH").unwrap_or_else(|_| "schedule.json".to_string());

        let reminder_date = match env::var("REMINDER_DATE") {
            Ok(raw) => Some(
                NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .with_context(|| format!("Invalid REMINDER_DATE '{raw}', expected YYYY-MM-DD"))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            telegram_bot_token,
            telegram_chat_ids,
            schedule_path,
            reminder_date,
            morning_time: time_from_env("MORNING_TIME", "07:00")?,
            evening_time: time_from_env("EVENING_TIME", "18:00")?,
            late_night_time: time_from_env("LATE_NIGHT_TIME", "22:00")?,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn parse_chat_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

fn time_from_env(var: &str, default: &str) -> Result<NaiveTime> {
    let raw = env::var(var).unwrap_or_else(|_| default.to_string());
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .with_context(|| format!("Invalid {var} '{raw}', expected HH:MM"))
}
