use medireminder_api::Application;
use medireminder_domain::MessageSettings;
use medireminder_infra::{InMemorySmsGateway, MediContext};
use medireminder_sdk::MediSDK;
use std::sync::Arc;

pub struct TestApp {
    /// Shares repositories and gateway with the running server
    pub ctx: MediContext,
    pub gateway: Arc<InMemorySmsGateway>,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, MediSDK, String) {
    spawn_app_with_test_phone(None).await
}

pub async fn spawn_app_with_test_phone(
    test_phone_number: Option<String>,
) -> (TestApp, MediSDK, String) {
    let mut ctx = MediContext::create_inmemory();
    ctx.config.port = 0; // Random port
    ctx.config.test_phone_number = test_phone_number;
    ctx.config.messages = MessageSettings::default();
    let gateway = Arc::new(InMemorySmsGateway::new());
    ctx.sms = gateway.clone();

    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { ctx, gateway };
    let sdk = MediSDK::new(address.clone());
    (app, sdk, address)
}
