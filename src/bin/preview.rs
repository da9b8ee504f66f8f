//! Template preview harness.
//!
//! Renders all three reminder templates for a given date to stdout without
//! sending anything. Useful for eyeballing schedule changes before they go
//! out for real.
//!
//! Usage: `preview <YYYY-MM-DD>` (schedule path from SCHEDULE_PATH, default
//! `schedule.json`).

use anyhow::{Context, Result};
use chrono::NaiveDate;
use dotenvy::dotenv;

use caretaker::features::reminders::{generate_reminder_content, DrugIcons};
use caretaker::features::schedule::ScheduleStore;

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let raw_date = std::env::args().nth(1).context(
        "Usage: preview <YYYY-MM-DD>\nExample: preview 2025-07-11",
    )?;
    let base_date = NaiveDate::parse_from_str(&raw_date, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{raw_date}', expected YYYY-MM-DD"))?;

    let schedule_path =
        std::env::var("SCHEDULE_PATH").unwrap_or_else(|_| "schedule.json".to_string());
    let store = ScheduleStore::load(&schedule_path)?;
    let icons = DrugIcons::standard();

    println!("\n{}", "=".repeat(50));
    println!("  GENERATING TEMPLATES FOR DATE: {}", base_date.format("%A, %Y-%m-%d"));
    println!("{}\n", "=".repeat(50));

    let titles = [
        ("morning", "Morning Template (7 AM)"),
        ("evening", "Evening Checklist (6 PM)"),
        ("late_night", "Late Night Template (10 PM)"),
    ];

    for (reminder_type, title) in titles {
        let content = generate_reminder_content(reminder_type, base_date, &store, &icons);

        println!("--- {title} ---");
        println!("Subject: {}", content.subject);
        println!("Should send: {}", content.should_send);
        println!("Body:\n{}", content.body);
        println!("{}\n", "-".repeat(content.subject.len() + 9));
    }

    Ok(())
}
