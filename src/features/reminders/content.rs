//! Reminder content generation: the single source of truth for what each
//! daily notification says and whether it is worth sending at all.
//!
//! Everything here is a pure function of (reminder type, base date, schedule,
//! icon map). No clocks, no I/O; the caller supplies the date, so every
//! message is reproducible after the fact.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Drug icons injected via DrugIcons instead of a module constant
//! - 1.0.0: Initial release with morning/evening/late_night templates

use chrono::{Duration, NaiveDate};

use crate::features::reminders::presentation::DrugIcons;
use crate::features::schedule::{Appointment, Medication, ScheduleEntry, ScheduleStore};

/// The three daily notification slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderType {
    Morning,
    Evening,
    LateNight,
}

impl ReminderType {
    /// Parse the wire/config spelling of a reminder type.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "morning" => Some(Self::Morning),
            "evening" => Some(Self::Evening),
            "late_night" => Some(Self::LateNight),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Evening => "evening",
            Self::LateNight => "late_night",
        }
    }
}

/// Generated notification: subject, body, and whether it is worth delivering.
/// Recomputed on every invocation; never persisted.
#[derive(Debug, Clone)]
pub struct ReminderContent {
    pub subject: String,
    pub body: String,
    pub should_send: bool,
}

/// Generate the subject, body, and send-worthiness for one reminder slot.
///
/// `reminder_type` is accepted as a string because it arrives from
/// configuration: an unrecognized value is an operator mistake, and it must
/// come back as reportable error content rather than a panic. Error content
/// is flagged should_send so the misconfiguration reaches the operator's chat
/// instead of dying in a log nobody reads.
pub fn generate_reminder_content(
    reminder_type: &str,
    base_date: NaiveDate,
    store: &ScheduleStore,
    icons: &DrugIcons,
) -> ReminderContent {
    let Some(kind) = ReminderType::parse(reminder_type) else {
        return ReminderContent {
            subject: "Reminder Configuration Error".to_string(),
            body: format!("Unknown reminder_type '{reminder_type}'"),
            should_send: true,
        };
    };

    match kind {
        ReminderType::Morning => {
            let entry = store.find(base_date);
            ReminderContent {
                subject: format!(
                    "🌅 Good Morning! Your Schedule for {}",
                    base_date.format("%a. %-m/%-d")
                ),
                body: format_full_reminder_body(entry, "Today", icons),
                should_send: entry.is_some_and(|e| !e.is_empty()),
            }
        }
        ReminderType::Evening => {
            let entry = store.find(base_date);
            ReminderContent {
                subject: format!("🔍 Evening Check-in: {}", base_date.format("%a. %-m/%-d")),
                body: format_evening_checklist_body(entry, icons),
                should_send: entry.is_some_and(|e| !e.medications.is_empty()),
            }
        }
        ReminderType::LateNight => {
            let tomorrow = base_date + Duration::days(1);
            let entry = store.find(tomorrow);
            ReminderContent {
                subject: format!("🌙 Tomorrow's Preview: {}", tomorrow.format("%a. %-m/%-d")),
                body: format_full_reminder_body(entry, "Tomorrow", icons),
                should_send: entry.is_some_and(|e| !e.is_empty()),
            }
        }
    }
}

/// Render a complete day: milestone, then appointments, then medications.
///
/// A missing entry and a present-but-empty entry produce distinct sentinel
/// bodies so the two cases stay tellable apart downstream.
pub fn format_full_reminder_body(
    entry: Option<&ScheduleEntry>,
    day_label: &str,
    icons: &DrugIcons,
) -> String {
    let Some(day) = entry else {
        return format!("📅 No schedule found for {day_label}.");
    };

    if day.is_empty() {
        return format!("📅 No specific appointments or medications scheduled for {day_label}.");
    }

    let mut lines: Vec<String> = Vec::new();

    if let Some(milestone) = &day.milestone {
        lines.push("🎯 **Milestone**".to_string());
        lines.push(format!("_{milestone}_"));
        lines.push(String::new());
    }

    if !day.appointments.is_empty() {
        lines.push("📅 **Events & Appointments**".to_string());
        for appt in &day.appointments {
            lines.push(format_appointment_line(appt));
        }
        lines.push(String::new());
    }

    if !day.medications.is_empty() {
        lines.push("**MEDICATIONS**".to_string());
        lines.push(String::new());
        for med in &day.medications {
            lines.push(format_medication_line(med, icons));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Render the evening medication checklist for one day.
pub fn format_evening_checklist_body(entry: Option<&ScheduleEntry>, icons: &DrugIcons) -> String {
    let medications = match entry {
        Some(day) if !day.medications.is_empty() => &day.medications,
        _ => return "✅ No medications to checklist for this evening.".to_string(),
    };

    let mut lines = vec!["**Please review each item:**".to_string()];
    for med in medications {
        lines.push(format_medication_line(med, icons));
        lines.push(String::new());
    }

    lines.join("\n")
}

fn format_appointment_line(appt: &Appointment) -> String {
    let time = appt.time.trim();
    let what = appt.what.trim();

    if time.is_empty() || what.is_empty() {
        return format!("📝 {what}");
    }

    match appt.location.as_deref() {
        Some(location) if !location.is_empty() => {
            format!("🕐 **{time}** - {what}\n   📍 {location}")
        }
        _ => format!("🕐 **{time}** - {what}"),
    }
}

/// One medication line: icon, course prefix, bold upper-cased name, details.
///
/// Prefix precedence is fixed and must hold even when several flags are set:
/// start-of-course beats last-day beats trigger-dose.
fn format_medication_line(med: &Medication, icons: &DrugIcons) -> String {
    let prefix = if med.is_start {
        "**START:** "
    } else if med.is_stop {
        "**LAST DAY:** "
    } else if med.is_trigger {
        "**TRIGGER:** "
    } else {
        ""
    };

    format!(
        "{} {}**{}**\n   _{}_",
        icons.icon_for(med),
        prefix,
        med.name.to_uppercase(),
        med.details
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estradiol_start() -> Medication {
        Medication {
            name: "Estradiol".to_string(),
            details: "1 tablet".to_string(),
            is_start: true,
            is_stop: false,
            is_trigger: false,
        }
    }

    fn store_with_estradiol() -> ScheduleStore {
        ScheduleStore::from_entries(vec![ScheduleEntry {
            date: "2025-07-11".to_string(),
            milestone: None,
            appointments: vec![],
            medications: vec![estradiol_start()],
        }])
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_morning_with_medications() {
        let store = store_with_estradiol();
        let icons = DrugIcons::standard();
        let content =
            generate_reminder_content("morning", date(2025, 7, 11), &store, &icons);

        assert!(content.should_send);
        assert_eq!(content.subject, "🌅 Good Morning! Your Schedule for Fri. 7/11");
        assert!(content.body.contains("**MEDICATIONS**"));
        assert!(content.body.contains("START"));
        assert!(content.body.contains("ESTRADIOL"));
        assert!(content.body.contains("1 tablet"));
    }

    #[test]
    fn test_evening_checklist_same_medication_line() {
        let store = store_with_estradiol();
        let icons = DrugIcons::standard();
        let content =
            generate_reminder_content("evening", date(2025, 7, 11), &store, &icons);

        assert!(content.should_send);
        assert!(content.body.starts_with("**Please review each item:**"));
        assert!(content.body.contains(&format_medication_line(&estradiol_start(), &icons)));
    }

    #[test]
    fn test_late_night_previews_next_day() {
        let store = store_with_estradiol();
        let icons = DrugIcons::standard();
        // Base date 7/10 must look up 7/11, never 7/10.
        let content =
            generate_reminder_content("late_night", date(2025, 7, 10), &store, &icons);

        assert!(content.should_send);
        assert_eq!(content.subject, "🌙 Tomorrow's Preview: Fri. 7/11");
        assert!(content.body.contains("ESTRADIOL"));
    }

    #[test]
    fn test_late_night_crosses_month_boundary() {
        let store = ScheduleStore::from_entries(vec![ScheduleEntry {
            date: "2025-08-01".to_string(),
            milestone: Some("Transfer day".to_string()),
            appointments: vec![],
            medications: vec![],
        }]);
        let icons = DrugIcons::standard();
        let content =
            generate_reminder_content("late_night", date(2025, 7, 31), &store, &icons);

        assert!(content.should_send);
        assert!(content.body.contains("Transfer day"));
    }

    #[test]
    fn test_not_found_sentinel_all_types() {
        let store = ScheduleStore::from_entries(vec![]);
        let icons = DrugIcons::standard();
        let day = date(2025, 7, 11);

        let morning = generate_reminder_content("morning", day, &store, &icons);
        assert!(!morning.should_send);
        assert_eq!(morning.body, "📅 No schedule found for Today.");

        let evening = generate_reminder_content("evening", day, &store, &icons);
        assert!(!evening.should_send);
        assert_eq!(evening.body, "✅ No medications to checklist for this evening.");

        let late_night = generate_reminder_content("late_night", day, &store, &icons);
        assert!(!late_night.should_send);
        assert_eq!(late_night.body, "📅 No schedule found for Tomorrow.");
    }

    #[test]
    fn test_empty_entry_sentinel_distinct_from_not_found() {
        let store = ScheduleStore::from_entries(vec![ScheduleEntry {
            date: "2025-07-11".to_string(),
            milestone: None,
            appointments: vec![],
            medications: vec![],
        }]);
        let icons = DrugIcons::standard();
        let content =
            generate_reminder_content("morning", date(2025, 7, 11), &store, &icons);

        assert!(!content.should_send);
        assert_eq!(
            content.body,
            "📅 No specific appointments or medications scheduled for Today."
        );
        assert_ne!(content.body, "📅 No schedule found for Today.");
    }

    #[test]
    fn test_start_prefix_beats_trigger() {
        let mut med = estradiol_start();
        med.is_trigger = true;
        let icons = DrugIcons::standard();

        let line = format_medication_line(&med, &icons);
        assert!(line.contains("**START:**"));
        assert!(!line.contains("**TRIGGER:**"));
    }

    #[test]
    fn test_stop_prefix_beats_trigger() {
        let med = Medication {
            name: "Ganirelix".to_string(),
            details: "250mcg injection".to_string(),
            is_start: false,
            is_stop: true,
            is_trigger: true,
        };
        let icons = DrugIcons::standard();

        let line = format_medication_line(&med, &icons);
        assert!(line.contains("**LAST DAY:**"));
        assert!(!line.contains("**TRIGGER:**"));
        assert!(line.starts_with("🛑"));
    }

    #[test]
    fn test_trigger_prefix_when_only_trigger() {
        let med = Medication {
            name: "Pregnyl".to_string(),
            details: "10,000 units".to_string(),
            is_start: false,
            is_stop: false,
            is_trigger: true,
        };
        let icons = DrugIcons::standard();

        let line = format_medication_line(&med, &icons);
        assert!(line.contains("**TRIGGER:** **PREGNYL**"));
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let store = store_with_estradiol();
        let icons = DrugIcons::standard();
        let day = date(2025, 7, 11);

        let first = generate_reminder_content("morning", day, &store, &icons);
        let second = generate_reminder_content("morning", day, &store, &icons);
        assert_eq!(first.subject, second.subject);
        assert_eq!(first.body, second.body);
        assert_eq!(first.should_send, second.should_send);
    }

    #[test]
    fn test_appointment_with_location() {
        let entry = ScheduleEntry {
            date: "2025-07-14".to_string(),
            milestone: None,
            appointments: vec![Appointment {
                time: "8:30 AM".to_string(),
                what: "Monitoring ultrasound".to_string(),
                location: Some("Clinic, Suite 300".to_string()),
            }],
            medications: vec![],
        };
        let icons = DrugIcons::standard();

        let body = format_full_reminder_body(Some(&entry), "Today", &icons);
        assert!(body.contains("📅 **Events & Appointments**"));
        assert!(body.contains("🕐 **8:30 AM** - Monitoring ultrasound"));
        assert!(body.contains("📍 Clinic, Suite 300"));
    }

    #[test]
    fn test_appointment_without_time_renders_as_note() {
        let entry = ScheduleEntry {
            date: "2025-07-14".to_string(),
            milestone: None,
            appointments: vec![Appointment {
                time: String::new(),
                what: "Call pharmacy about refill".to_string(),
                location: None,
            }],
            medications: vec![],
        };
        let icons = DrugIcons::standard();

        let body = format_full_reminder_body(Some(&entry), "Today", &icons);
        assert!(body.contains("📝 Call pharmacy about refill"));
        assert!(!body.contains("🕐"));
    }

    #[test]
    fn test_section_order_milestone_appointments_medications() {
        let entry = ScheduleEntry {
            date: "2025-07-14".to_string(),
            milestone: Some("Stim day 3".to_string()),
            appointments: vec![Appointment {
                time: "9:00 AM".to_string(),
                what: "Bloodwork".to_string(),
                location: None,
            }],
            medications: vec![estradiol_start()],
        };
        let icons = DrugIcons::standard();

        let body = format_full_reminder_body(Some(&entry), "Today", &icons);
        let milestone_at = body.find("🎯 **Milestone**").unwrap();
        let appts_at = body.find("📅 **Events & Appointments**").unwrap();
        let meds_at = body.find("**MEDICATIONS**").unwrap();
        assert!(milestone_at < appts_at);
        assert!(appts_at < meds_at);
    }

    #[test]
    fn test_unknown_reminder_type_is_reportable() {
        let store = store_with_estradiol();
        let icons = DrugIcons::standard();
        let content = generate_reminder_content("weekly", date(2025, 7, 11), &store, &icons);

        assert!(!content.subject.is_empty());
        assert_eq!(content.subject, "Reminder Configuration Error");
        assert_eq!(content.body, "Unknown reminder_type 'weekly'");
        // Misconfiguration is forced through so the operator sees it.
        assert!(content.should_send);
    }

    #[test]
    fn test_reminder_type_parse_round_trip() {
        for name in ["morning", "evening", "late_night"] {
            assert_eq!(ReminderType::parse(name).unwrap().as_str(), name);
        }
        assert!(ReminderType::parse("Morning").is_none());
        assert!(ReminderType::parse("").is_none());
    }
}
