use crate::{
    error::ApiError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use medireminder_api_structs::send_sms::{APIResponse, RequestBody};
use medireminder_domain::{InvalidPhoneNumber, PhoneNumber};
use medireminder_infra::{MediContext, OutboundSms, SmsGatewayError};
use tracing::info;

pub(super) fn error_handler(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::InvalidPhoneNumber(e) => ApiError::BadClientData(e.to_string()),
        UseCaseErrors::EmptyMessage => ApiError::BadClientData("message is required".into()),
        UseCaseErrors::GatewayError(e) => ApiError::BadGateway(e.to_string()),
    }
}

pub async fn send_sms_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<MediContext>,
) -> Result<HttpResponse, ApiError> {
    let usecase = SendSmsUseCase {
        to: body.0.to,
        message: body.0.message,
        name: body.0.name,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::success("SMS sent", res)))
        .map_err(error_handler)
}

/// Sends an ad hoc message right away, nothing is stored
#[derive(Debug)]
pub(super) struct SendSmsUseCase {
    pub to: String,
    pub message: String,
    /// Recipient name, only used for logging
    pub name: Option<String>,
}

#[derive(Debug)]
pub(super) enum UseCaseErrors {
    InvalidPhoneNumber(InvalidPhoneNumber),
    EmptyMessage,
    GatewayError(SmsGatewayError),
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendSmsUseCase {
    type Response = serde_json::Value;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "SendSms";

    async fn execute(&mut self, ctx: &MediContext) -> Result<Self::Response, Self::Errors> {
        let to = PhoneNumber::parse(&self.to).map_err(UseCaseErrors::InvalidPhoneNumber)?;
        if self.message.trim().is_empty() {
            return Err(UseCaseErrors::EmptyMessage);
        }

        let sms = OutboundSms {
            to,
            body: self.message.clone(),
            sender_id: ctx.config.sms.sender_id.clone(),
        };
        let res = ctx
            .sms
            .send(&sms)
            .await
            .map_err(UseCaseErrors::GatewayError)?;

        info!(
            "Sent SMS to {} ({})",
            sms.to,
            self.name.as_deref().unwrap_or("unnamed recipient")
        );
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medireminder_infra::InMemorySmsGateway;
    use std::sync::Arc;

    fn setup() -> (MediContext, Arc<InMemorySmsGateway>) {
        let mut ctx = MediContext::create_inmemory();
        let gateway = Arc::new(InMemorySmsGateway::new());
        ctx.sms = gateway.clone();
        (ctx, gateway)
    }

    fn usecase(to: &str, message: &str) -> SendSmsUseCase {
        SendSmsUseCase {
            to: to.into(),
            message: message.into(),
            name: Some("Amina".into()),
        }
    }

    #[actix_web::test]
    async fn it_sends_to_normalized_number_without_composing() {
        let (ctx, gateway) = setup();
        let res = execute(usecase("0712 345 678", "Your results are ready"), &ctx).await;
        assert!(res.is_ok());

        let delivered = gateway.delivered();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].to.as_str(), "+254712345678");
        assert_eq!(delivered[0].body, "Your results are ready");
        assert!(ctx.repos.reminders.find_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn it_rejects_invalid_input_before_calling_gateway() {
        let (ctx, gateway) = setup();
        assert!(matches!(
            execute(usecase("12345", "Hello"), &ctx).await,
            Err(UseCaseErrors::InvalidPhoneNumber(_))
        ));
        assert!(matches!(
            execute(usecase("0712345678", "  "), &ctx).await,
            Err(UseCaseErrors::EmptyMessage)
        ));
        assert_eq!(gateway.attempts(), 0);
    }

    #[actix_web::test]
    async fn it_surfaces_gateway_failure() {
        let (ctx, gateway) = setup();
        gateway.set_failing(true);
        let err = execute(usecase("0712345678", "Hello"), &ctx)
            .await
            .unwrap_err();
        assert!(matches!(err, UseCaseErrors::GatewayError(_)));
        assert!(matches!(error_handler(err), ApiError::BadGateway(_)));
    }
}
