use crate::reminder::{Reminder, ReminderKind};

/// Used in the greeting when a `Reminder` has no recipient name
const FALLBACK_NAME: &str = "there";

#[derive(Debug, Clone, Default)]
pub struct MessageSettings {
    /// When set, appointment reminders ask the recipient to reply with this
    /// keyword to confirm attendance
    pub appointment_reply_keyword: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Creates the SMS text for a `Reminder`
pub fn compose_message(reminder: &Reminder, settings: &MessageSettings) -> String {
    let name = non_blank(&reminder.name).unwrap_or(FALLBACK_NAME);

    match &reminder.kind {
        ReminderKind::Medication { medication } => format!(
            "Hi {}, this is your reminder to take: {}.",
            name,
            medication.trim()
        ),
        ReminderKind::Appointment {
            doctor_name,
            clinic_name,
            appointment_date,
            appointment_time,
        } => {
            let mut message = format!("Hi {}, this is a reminder of your appointment", name);
            if let Some(doctor) = non_blank(doctor_name) {
                message.push_str(&format!(" with Dr. {}", doctor));
            }
            // e.g. "Tuesday, October 20"
            message.push_str(&format!(
                " on {} at {}",
                appointment_date.format("%A, %B %-d"),
                appointment_time.trim()
            ));
            if let Some(clinic) = non_blank(clinic_name) {
                message.push_str(&format!(" at {}", clinic));
            }
            message.push('.');
            if let Some(keyword) = non_blank(&settings.appointment_reply_keyword) {
                message.push_str(&format!(" Reply {} to confirm.", keyword));
            }
            message
        }
    }
}
