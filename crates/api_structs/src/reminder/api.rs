use crate::dtos::ReminderDTO;
use crate::shared::ActionResponse;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub mod create_reminder {
    use super::*;

    #[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
    #[serde(rename_all = "camelCase")]
    pub enum ReminderType {
        Medication,
        Appointment,
    }

    /// Fields are optional so that missing ones can be reported with a
    /// proper validation message
    #[derive(Debug, Deserialize, Serialize, Default, Clone)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        pub reminder_type: Option<ReminderType>,
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub phone: Option<String>,
        #[serde(default)]
        pub medication: Option<String>,
        #[serde(default)]
        pub doctor_name: Option<String>,
        #[serde(default)]
        pub clinic_name: Option<String>,
        #[serde(default)]
        pub appointment_date: Option<NaiveDate>,
        #[serde(default)]
        pub appointment_time: Option<String>,
        #[serde(default)]
        pub send_at: Option<DateTime<Utc>>,
        /// Creates one reminder per day for this many days
        #[serde(default)]
        pub repeat_days: Option<usize>,
    }

    pub type APIResponse = ActionResponse<Vec<ReminderDTO>>;
}

pub mod get_reminders {
    use super::*;

    pub type APIResponse = Vec<ReminderDTO>;
}
