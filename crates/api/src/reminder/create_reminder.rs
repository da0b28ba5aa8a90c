use crate::{
    error::ApiError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use chrono::{DateTime, NaiveDate, Utc};
use medireminder_api_structs::create_reminder::{APIResponse, ReminderType, RequestBody};
use medireminder_api_structs::dtos::ReminderDTO;
use medireminder_domain::{Reminder, ReminderKind};
use medireminder_infra::MediContext;

fn error_handler(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::InvalidRequest(msg) => ApiError::BadClientData(msg),
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

async fn handle_create_reminder(
    body: RequestBody,
    reminder_type: Option<ReminderType>,
    ctx: &MediContext,
) -> Result<HttpResponse, ApiError> {
    let reminder_type = reminder_type.ok_or_else(|| {
        ApiError::BadClientData(
            "type is required and must be either `medication` or `appointment`".into(),
        )
    })?;

    let usecase = CreateRemindersUseCase {
        reminder_type,
        name: body.name,
        phone: body.phone,
        medication: body.medication,
        doctor_name: body.doctor_name,
        clinic_name: body.clinic_name,
        appointment_date: body.appointment_date,
        appointment_time: body.appointment_time,
        send_at: body.send_at,
        repeat_days: body.repeat_days,
    };

    execute(usecase, ctx)
        .await
        .map(|reminders| {
            let message = format!("{} reminder(s) created", reminders.len());
            let reminders = reminders.into_iter().map(ReminderDTO::new).collect();
            HttpResponse::Created().json(APIResponse::success(message, reminders))
        })
        .map_err(error_handler)
}

pub async fn create_reminder_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<MediContext>,
) -> Result<HttpResponse, ApiError> {
    let reminder_type = body.0.reminder_type;
    handle_create_reminder(body.0, reminder_type, &ctx).await
}

pub async fn create_medication_reminder_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<MediContext>,
) -> Result<HttpResponse, ApiError> {
    handle_create_reminder(body.0, Some(ReminderType::Medication), &ctx).await
}

pub async fn create_appointment_reminder_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<MediContext>,
) -> Result<HttpResponse, ApiError> {
    handle_create_reminder(body.0, Some(ReminderType::Appointment), &ctx).await
}

/// Creates one `Reminder`, or a daily series of them when `repeat_days`
/// is given
#[derive(Debug)]
struct CreateRemindersUseCase {
    pub reminder_type: ReminderType,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub medication: Option<String>,
    pub doctor_name: Option<String>,
    pub clinic_name: Option<String>,
    pub appointment_date: Option<NaiveDate>,
    pub appointment_time: Option<String>,
    pub send_at: Option<DateTime<Utc>>,
    pub repeat_days: Option<usize>,
}

#[derive(Debug)]
enum UseCaseErrors {
    InvalidRequest(String),
    StorageError,
}

fn required_text(value: &Option<String>, field: &str) -> Result<String, UseCaseErrors> {
    match value.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(UseCaseErrors::InvalidRequest(format!(
            "{} is required",
            field
        ))),
    }
}

fn optional_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
}

impl CreateRemindersUseCase {
    fn kind(&self) -> Result<ReminderKind, UseCaseErrors> {
        match self.reminder_type {
            ReminderType::Medication => Ok(ReminderKind::Medication {
                medication: required_text(&self.medication, "medication")?,
            }),
            ReminderType::Appointment => {
                let appointment_date = self.appointment_date.ok_or_else(|| {
                    UseCaseErrors::InvalidRequest("appointmentDate is required".into())
                })?;
                Ok(ReminderKind::Appointment {
                    doctor_name: optional_text(&self.doctor_name),
                    clinic_name: optional_text(&self.clinic_name),
                    appointment_date,
                    appointment_time: required_text(&self.appointment_time, "appointmentTime")?,
                })
            }
        }
    }

    fn repeat_days(&self, max_repeat_days: usize) -> Result<usize, UseCaseErrors> {
        match self.repeat_days {
            None => Ok(1),
            Some(days) if days >= 1 && days <= max_repeat_days => Ok(days),
            Some(days) => Err(UseCaseErrors::InvalidRequest(format!(
                "repeatDays must be between 1 and {}, got: {}",
                max_repeat_days, days
            ))),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateRemindersUseCase {
    type Response = Vec<Reminder>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "CreateReminders";

    async fn execute(&mut self, ctx: &MediContext) -> Result<Self::Response, Self::Errors> {
        let phone = required_text(&self.phone, "phone")?;
        let send_at = self
            .send_at
            .ok_or_else(|| UseCaseErrors::InvalidRequest("sendAt is required".into()))?;
        let kind = self.kind()?;
        let repeat_days = self.repeat_days(ctx.config.max_repeat_days)?;

        let reminders = Reminder::new(
            optional_text(&self.name),
            phone,
            kind,
            send_at.timestamp_millis(),
            ctx.sys.get_timestamp_millis(),
        )
        .daily_series(repeat_days);

        ctx.repos
            .reminders
            .bulk_insert(&reminders)
            .await
            .map(|_| reminders)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use medireminder_domain::DAY_MILLIS;

    fn medication_usecase() -> CreateRemindersUseCase {
        CreateRemindersUseCase {
            reminder_type: ReminderType::Medication,
            name: Some(" Amina ".into()),
            phone: Some("0712345678".into()),
            medication: Some("Metformin".into()),
            doctor_name: None,
            clinic_name: None,
            appointment_date: None,
            appointment_time: None,
            send_at: Some(Utc.with_ymd_and_hms(2026, 10, 20, 8, 0, 0).unwrap()),
            repeat_days: None,
        }
    }

    fn appointment_usecase() -> CreateRemindersUseCase {
        CreateRemindersUseCase {
            reminder_type: ReminderType::Appointment,
            medication: None,
            doctor_name: Some("Otieno".into()),
            clinic_name: Some("".into()),
            appointment_date: NaiveDate::from_ymd_opt(2026, 10, 21),
            appointment_time: Some("10:30 AM".into()),
            ..medication_usecase()
        }
    }

    #[actix_web::test]
    async fn it_creates_medication_reminder() {
        let ctx = MediContext::create_inmemory();
        let reminders = execute(medication_usecase(), &ctx).await.unwrap();

        assert_eq!(reminders.len(), 1);
        let reminder = &reminders[0];
        assert_eq!(reminder.name, Some("Amina".into()));
        assert_eq!(reminder.phone, "0712345678");
        assert!(!reminder.sent);
        assert_eq!(
            reminder.kind,
            ReminderKind::Medication {
                medication: "Metformin".into()
            }
        );
        assert_eq!(
            ctx.repos.reminders.find(&reminder.id).await,
            Some(reminder.clone())
        );
    }

    #[actix_web::test]
    async fn it_creates_appointment_reminder_without_blank_fields() {
        let ctx = MediContext::create_inmemory();
        let reminders = execute(appointment_usecase(), &ctx).await.unwrap();

        match &reminders[0].kind {
            ReminderKind::Appointment {
                doctor_name,
                clinic_name,
                ..
            } => {
                assert_eq!(doctor_name, &Some("Otieno".to_string()));
                assert_eq!(clinic_name, &None);
            }
            kind => panic!("Expected appointment, got: {:?}", kind),
        }
    }

    #[actix_web::test]
    async fn it_creates_one_reminder_per_repeat_day() {
        let ctx = MediContext::create_inmemory();
        let mut usecase = medication_usecase();
        usecase.repeat_days = Some(7);
        let send_at = usecase.send_at.unwrap().timestamp_millis();

        let reminders = execute(usecase, &ctx).await.unwrap();
        assert_eq!(reminders.len(), 7);
        for (day, reminder) in reminders.iter().enumerate() {
            assert_eq!(reminder.send_at, send_at + day as i64 * DAY_MILLIS);
        }
        assert_eq!(ctx.repos.reminders.find_all().await.unwrap().len(), 7);
    }

    #[actix_web::test]
    async fn it_rejects_missing_required_fields() {
        let ctx = MediContext::create_inmemory();

        let mut usecase = medication_usecase();
        usecase.phone = Some("   ".into());
        assert!(matches!(
            execute(usecase, &ctx).await,
            Err(UseCaseErrors::InvalidRequest(_))
        ));

        let mut usecase = medication_usecase();
        usecase.send_at = None;
        assert!(matches!(
            execute(usecase, &ctx).await,
            Err(UseCaseErrors::InvalidRequest(_))
        ));

        let mut usecase = medication_usecase();
        usecase.medication = None;
        assert!(matches!(
            execute(usecase, &ctx).await,
            Err(UseCaseErrors::InvalidRequest(_))
        ));

        let mut usecase = appointment_usecase();
        usecase.appointment_date = None;
        assert!(matches!(
            execute(usecase, &ctx).await,
            Err(UseCaseErrors::InvalidRequest(_))
        ));

        assert!(ctx.repos.reminders.find_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn it_rejects_invalid_repeat_days() {
        let ctx = MediContext::create_inmemory();
        for days in [0, ctx.config.max_repeat_days + 1].iter() {
            let mut usecase = medication_usecase();
            usecase.repeat_days = Some(*days);
            assert!(matches!(
                execute(usecase, &ctx).await,
                Err(UseCaseErrors::InvalidRequest(_))
            ));
        }
    }
}
