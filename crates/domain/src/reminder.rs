use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of millis between two reminders of a daily series
pub const DAY_MILLIS: i64 = 1000 * 60 * 60 * 24;

/// What a `Reminder` is about. Each variant only carries the fields that are
/// meaningful for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ReminderKind {
    #[serde(rename_all = "camelCase")]
    Medication { medication: String },
    #[serde(rename_all = "camelCase")]
    Appointment {
        doctor_name: Option<String>,
        clinic_name: Option<String>,
        appointment_date: NaiveDate,
        appointment_time: String,
    },
}

impl ReminderKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Medication { .. } => "medication",
            Self::Appointment { .. } => "appointment",
        }
    }
}

/// A `Reminder` is an SMS that should be sent to `phone` once `send_at`
/// has passed.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    /// Display name of the recipient
    pub name: Option<String>,
    /// Contact number exactly as it was submitted. It is normalized at
    /// dispatch time.
    pub phone: String,
    pub kind: ReminderKind,
    /// The timestamp in millis from which this `Reminder` can be sent
    pub send_at: i64,
    /// Set once the SMS gateway has confirmed a successful delivery.
    /// Only `Reminder`s where this is false are ever picked up for dispatch.
    pub sent: bool,
    pub created: i64,
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Reminder {
    pub fn new(
        name: Option<String>,
        phone: String,
        kind: ReminderKind,
        send_at: i64,
        created: i64,
    ) -> Self {
        Self {
            id: Default::default(),
            name,
            phone,
            kind,
            send_at,
            sent: false,
            created,
        }
    }

    pub fn is_due(&self, now: i64) -> bool {
        !self.sent && self.send_at <= now
    }

    /// Creates `days` reminders, one per day, starting with this one.
    /// Each copy gets its own id and a `send_at` that is shifted by a
    /// whole number of days.
    pub fn daily_series(self, days: usize) -> Vec<Self> {
        let mut reminders = Vec::with_capacity(days.max(1));
        for day in 1..days {
            let mut reminder = self.clone();
            reminder.id = Default::default();
            reminder.send_at = self.send_at + day as i64 * DAY_MILLIS;
            reminders.push(reminder);
        }
        reminders.insert(0, self);
        reminders
    }
}
