mod base;
mod reminder;
mod sms;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
pub use medireminder_api_structs::create_reminder::{
    ReminderType, RequestBody as CreateReminderBody,
};
pub use medireminder_api_structs::dtos::*;
pub use medireminder_api_structs::ActionResponse;
pub use medireminder_domain::{ReminderKind, ID};
use reminder::ReminderClient;
pub use reminder::{CreateAppointmentReminderInput, CreateMedicationReminderInput};
use sms::SmsClient;
pub use sms::SendSmsInput;
use status::StatusClient;
use std::sync::Arc;

// Domain
pub use medireminder_api_structs::dtos::ReminderDTO as Reminder;

/// Medication reminder service SDK
///
/// The SDK contains methods for interacting with the reminder server API.
#[derive(Clone)]
pub struct MediSDK {
    pub reminder: ReminderClient,
    pub sms: SmsClient,
    pub status: StatusClient,
}

impl MediSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let reminder = ReminderClient::new(base.clone());
        let sms = SmsClient::new(base.clone());
        let status = StatusClient::new(base);

        Self {
            reminder,
            sms,
            status,
        }
    }
}
