use crate::{APIResponse, BaseClient};
use medireminder_api_structs::{send_sms, send_test_sms};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct SmsClient {
    base: Arc<BaseClient>,
}

pub struct SendSmsInput {
    pub to: String,
    pub message: String,
    pub name: Option<String>,
}

impl SmsClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn send(&self, input: SendSmsInput) -> APIResponse<send_sms::APIResponse> {
        let body = send_sms::RequestBody {
            to: input.to,
            message: input.message,
            name: input.name,
        };
        self.base
            .post(body, "send-sms".into(), StatusCode::OK)
            .await
    }

    /// Sends a canned message to the test number configured on the server
    pub async fn send_test(&self) -> APIResponse<send_test_sms::APIResponse> {
        self.base
            .post((), "test-sms".into(), StatusCode::OK)
            .await
    }
}
