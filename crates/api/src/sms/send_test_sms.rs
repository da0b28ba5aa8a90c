use super::send_sms::{error_handler, SendSmsUseCase};
use crate::{error::ApiError, shared::usecase::execute};
use actix_web::{web, HttpResponse};
use medireminder_api_structs::send_test_sms::APIResponse;
use medireminder_infra::MediContext;

const TEST_MESSAGE: &str = "This is a test message from the medication reminder service.";

pub async fn send_test_sms_controller(
    ctx: web::Data<MediContext>,
) -> Result<HttpResponse, ApiError> {
    let to = ctx.config.test_phone_number.clone().ok_or_else(|| {
        ApiError::BadClientData("No test phone number has been configured".into())
    })?;

    let usecase = SendSmsUseCase {
        to,
        message: TEST_MESSAGE.into(),
        name: None,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::success("Test SMS sent", res)))
        .map_err(error_handler)
}
