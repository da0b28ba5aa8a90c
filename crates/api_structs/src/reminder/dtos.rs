use chrono::{DateTime, TimeZone, Utc};
use medireminder_domain::{Reminder, ReminderKind, ID};
use serde::{Deserialize, Serialize};

fn to_datetime(timestamp_millis: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(timestamp_millis)
        .single()
        .unwrap_or_default()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub name: Option<String>,
    pub phone: String,
    #[serde(flatten)]
    pub kind: ReminderKind,
    pub send_at: DateTime<Utc>,
    pub sent: bool,
    pub created: DateTime<Utc>,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            name: reminder.name,
            phone: reminder.phone,
            kind: reminder.kind,
            send_at: to_datetime(reminder.send_at),
            sent: reminder.sent,
            created: to_datetime(reminder.created),
        }
    }
}
