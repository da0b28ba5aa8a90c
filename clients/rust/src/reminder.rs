use crate::{APIResponse, BaseClient};
use chrono::{DateTime, NaiveDate, Utc};
use medireminder_api_structs::{create_reminder, get_reminders};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

pub struct CreateMedicationReminderInput {
    pub name: Option<String>,
    pub phone: String,
    pub medication: String,
    pub send_at: DateTime<Utc>,
    pub repeat_days: Option<usize>,
}

pub struct CreateAppointmentReminderInput {
    pub name: Option<String>,
    pub phone: String,
    pub doctor_name: Option<String>,
    pub clinic_name: Option<String>,
    pub appointment_date: NaiveDate,
    pub appointment_time: String,
    pub send_at: DateTime<Utc>,
    pub repeat_days: Option<usize>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Posts the raw request body to the generic create route, the
    /// `type` field decides what kind of reminder gets created
    pub async fn create(
        &self,
        body: create_reminder::RequestBody,
    ) -> APIResponse<create_reminder::APIResponse> {
        self.base
            .post(body, "api/reminders".into(), StatusCode::CREATED)
            .await
    }

    pub async fn create_medication(
        &self,
        input: CreateMedicationReminderInput,
    ) -> APIResponse<create_reminder::APIResponse> {
        let body = create_reminder::RequestBody {
            name: input.name,
            phone: Some(input.phone),
            medication: Some(input.medication),
            send_at: Some(input.send_at),
            repeat_days: input.repeat_days,
            ..Default::default()
        };
        self.base
            .post(body, "api/reminders/medication".into(), StatusCode::CREATED)
            .await
    }

    pub async fn create_appointment(
        &self,
        input: CreateAppointmentReminderInput,
    ) -> APIResponse<create_reminder::APIResponse> {
        let body = create_reminder::RequestBody {
            name: input.name,
            phone: Some(input.phone),
            doctor_name: input.doctor_name,
            clinic_name: input.clinic_name,
            appointment_date: Some(input.appointment_date),
            appointment_time: Some(input.appointment_time),
            send_at: Some(input.send_at),
            repeat_days: input.repeat_days,
            ..Default::default()
        };
        self.base
            .post(body, "api/reminders/appointment".into(), StatusCode::CREATED)
            .await
    }

    pub async fn list(&self) -> APIResponse<get_reminders::APIResponse> {
        self.base.get("api/reminders".into(), StatusCode::OK).await
    }
}
