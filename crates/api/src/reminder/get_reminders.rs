use crate::{
    error::ApiError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use medireminder_api_structs::dtos::ReminderDTO;
use medireminder_api_structs::get_reminders::APIResponse;
use medireminder_domain::Reminder;
use medireminder_infra::MediContext;

fn error_handler(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

pub async fn get_reminders_controller(
    ctx: web::Data<MediContext>,
) -> Result<HttpResponse, ApiError> {
    execute(GetRemindersUseCase {}, &ctx)
        .await
        .map(|reminders| {
            let reminders: APIResponse = reminders.into_iter().map(ReminderDTO::new).collect();
            HttpResponse::Ok().json(reminders)
        })
        .map_err(error_handler)
}

#[derive(Debug)]
struct GetRemindersUseCase {}

#[derive(Debug)]
enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetRemindersUseCase {
    type Response = Vec<Reminder>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetReminders";

    async fn execute(&mut self, ctx: &MediContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .reminders
            .find_all()
            .await
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
